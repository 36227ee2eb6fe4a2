// ── Schema binding ──
//
// Every data-model object in this crate is declared through
// `parameter_object!`: a table of parameters, each with its storage kind
// and the element name the data-model XML uses for it. The macro derives
// the struct, its serde mapping and the accessor set (getter, setter,
// builder, take, lazy `_mut`) so object modules stay pure transcription.
//
// Field kinds:
//   value   `Option<T>`, setter takes `T`
//   text    `Option<String>`, setter takes `impl Into<String>`
//   object  `Option<T>` single-instance child, `_mut` initializes on demand
//   table   `Vec<T>` multi-instance child, one repeated element per row

/// Implemented by every generated parameter object.
pub trait ParameterObject: Default + PartialEq {
    /// Standard object name, e.g. `Device.IPsec.Filter.{i}.`.
    const OBJECT_NAME: &'static str;

    /// Record this object and every populated descendant in `counts`.
    fn count_objects(&self, counts: &mut Vec<ObjectCount>);

    /// True when no parameter, child object or row has been populated.
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Number of instances of one object found in a parameter tree.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ObjectCount {
    pub object: &'static str,
    pub instances: usize,
}

impl ObjectCount {
    /// Bump the count for `object`, keeping first-seen order.
    pub fn record(counts: &mut Vec<Self>, object: &'static str) {
        match counts.iter_mut().find(|c| c.object == object) {
            Some(entry) => entry.instances += 1,
            None => counts.push(Self {
                object,
                instances: 1,
            }),
        }
    }
}

/// Storage that serializes to nothing when unpopulated.
pub trait Unset {
    fn is_unset(&self) -> bool;
}

impl<T> Unset for Option<T> {
    fn is_unset(&self) -> bool {
        self.is_none()
    }
}

impl<T> Unset for Vec<T> {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

/// `skip_serializing_if` hook shared by all generated fields.
pub(crate) fn is_unset<T: Unset>(value: &T) -> bool {
    value.is_unset()
}

macro_rules! parameter_storage {
    (value $ty:ty) => { Option<$ty> };
    (text $ty:ty) => { Option<$ty> };
    (object $ty:ty) => { Option<$ty> };
    (table $ty:ty) => { Vec<$ty> };
}
pub(crate) use parameter_storage;

macro_rules! parameter_census {
    (value $value:expr, $counts:ident) => {};
    (text $value:expr, $counts:ident) => {};
    (object $value:expr, $counts:ident) => {
        if let Some(child) = &$value {
            $crate::macros::ParameterObject::count_objects(child, $counts);
        }
    };
    (table $value:expr, $counts:ident) => {
        for row in &$value {
            $crate::macros::ParameterObject::count_objects(row, $counts);
        }
    };
}
pub(crate) use parameter_census;

macro_rules! parameter_accessors {
    (value $field:ident $ty:ty; $(#[$doc:meta])*) => {
        ::paste::paste! {
            $(#[$doc])*
            pub fn $field(&self) -> Option<&$ty> {
                self.$field.as_ref()
            }

            pub fn [<set_ $field>](&mut self, value: $ty) -> &mut Self {
                self.$field = Some(value);
                self
            }

            pub fn [<with_ $field>](mut self, value: $ty) -> Self {
                self.$field = Some(value);
                self
            }

            pub fn [<take_ $field>](&mut self) -> Option<$ty> {
                self.$field.take()
            }
        }
    };
    (text $field:ident $ty:ty; $(#[$doc:meta])*) => {
        ::paste::paste! {
            $(#[$doc])*
            pub fn $field(&self) -> Option<&str> {
                self.$field.as_deref()
            }

            pub fn [<set_ $field>](&mut self, value: impl Into<$ty>) -> &mut Self {
                self.$field = Some(value.into());
                self
            }

            pub fn [<with_ $field>](mut self, value: impl Into<$ty>) -> Self {
                self.$field = Some(value.into());
                self
            }

            pub fn [<take_ $field>](&mut self) -> Option<$ty> {
                self.$field.take()
            }
        }
    };
    (object $field:ident $ty:ty; $(#[$doc:meta])*) => {
        ::paste::paste! {
            $(#[$doc])*
            pub fn $field(&self) -> Option<&$ty> {
                self.$field.as_ref()
            }

            /// Mutable access, creating an empty object on first use.
            pub fn [<$field _mut>](&mut self) -> &mut $ty {
                self.$field.get_or_insert_with(Default::default)
            }

            pub fn [<set_ $field>](&mut self, value: $ty) -> &mut Self {
                self.$field = Some(value);
                self
            }

            pub fn [<with_ $field>](mut self, value: $ty) -> Self {
                self.$field = Some(value);
                self
            }

            pub fn [<take_ $field>](&mut self) -> Option<$ty> {
                self.$field.take()
            }
        }
    };
    (table $field:ident $ty:ty; $(#[$doc:meta])*) => {
        ::paste::paste! {
            $(#[$doc])*
            pub fn $field(&self) -> &[$ty] {
                &self.$field
            }

            /// Live row list; rows are pushed and removed in place.
            pub fn [<$field _mut>](&mut self) -> &mut Vec<$ty> {
                &mut self.$field
            }

            /// Replace every row.
            pub fn [<set_ $field>](&mut self, rows: Vec<$ty>) -> &mut Self {
                self.$field = rows;
                self
            }

            /// Append rows.
            pub fn [<with_ $field>](mut self, rows: impl IntoIterator<Item = $ty>) -> Self {
                self.$field.extend(rows);
                self
            }
        }
    };
}
pub(crate) use parameter_accessors;

/// Declare a data-model object (or table row) and its XML binding.
///
/// ```ignore
/// parameter_object! {
///     /// Security association.
///     pub struct ChildSa("Device.IPsec.IKEv2SA.{i}.ChildSA.{i}.") {
///         instance: value u32 => "@instance",
///         alias: text String => "Alias",
///         stats: object ChildSaStats => "Stats",
///     }
/// }
/// ```
macro_rules! parameter_object {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident ($object:literal) {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $kind:ident $ty:ty => $xml:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[allow(clippy::struct_field_names)]
        $vis struct $name {
            $(
                #[serde(rename = $xml, default, skip_serializing_if = "crate::macros::is_unset")]
                $field: $crate::macros::parameter_storage!($kind $ty),
            )*
        }

        impl $name {
            /// An empty instance; every parameter unset, every table empty.
            pub fn new() -> Self {
                Self::default()
            }

            $(
                $crate::macros::parameter_accessors!($kind $field $ty; $(#[$fmeta])*);
            )*
        }

        impl $crate::macros::ParameterObject for $name {
            const OBJECT_NAME: &'static str = $object;

            fn count_objects(&self, counts: &mut Vec<$crate::macros::ObjectCount>) {
                $crate::macros::ObjectCount::record(counts, Self::OBJECT_NAME);
                $(
                    $crate::macros::parameter_census!($kind self.$field, counts);
                )*
            }
        }
    };
}
pub(crate) use parameter_object;

/// Declare an enumerated string parameter.
///
/// Variants map one-to-one onto the standard's spelling, which is what
/// `Display`, `FromStr` and serde all use.
macro_rules! parameter_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $text:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::strum::Display,
            ::strum::EnumString,
            ::strum::EnumIter,
            ::strum::IntoStaticStr,
        )]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[strum(serialize = $text)]
                $variant,
            )+
        }

        impl $name {
            /// The standard's spelling of this value.
            pub fn as_str(self) -> &'static str {
                self.into()
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                text.parse().map_err(|_| {
                    <D::Error as ::serde::de::Error>::custom(
                        $crate::error::ModelError::InvalidEnumValue {
                            parameter: stringify!($name),
                            value: text.clone(),
                        },
                    )
                })
            }
        }
    };
}
pub(crate) use parameter_enum;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::{ObjectCount, ParameterObject};

    parameter_enum! {
        enum Mode {
            Open => "Open",
            Misconfigured => "Error_Misconfigured",
        }
    }

    parameter_object! {
        struct Leaf("Test.Leaf.{i}.") {
            instance: value u32 => "@instance",
            name: text String => "Name",
        }
    }

    parameter_object! {
        /// Test root.
        struct Root("Test.") {
            /// Whether the root is enabled.
            enable: value bool => "Enable",
            mode: value Mode => "Mode",
            child: object Leaf => "Child",
            leaves: table Leaf => "Leaf",
        }
    }

    #[test]
    fn new_instance_is_empty() {
        let root = Root::new();
        assert!(root.is_empty());
        assert_eq!(root.enable(), None);
        assert_eq!(root.child(), None);
        assert!(root.leaves().is_empty());
    }

    #[test]
    fn set_then_get() {
        let mut root = Root::new();
        root.set_enable(true).set_mode(Mode::Misconfigured);
        assert_eq!(root.enable(), Some(&true));
        assert_eq!(root.mode(), Some(&Mode::Misconfigured));
        assert!(!root.is_empty());
    }

    #[test]
    fn text_setter_accepts_str() {
        let leaf = Leaf::new().with_name("eth0");
        assert_eq!(leaf.name(), Some("eth0"));
    }

    #[test]
    fn take_clears_value() {
        let mut root = Root::new().with_enable(false);
        assert_eq!(root.take_enable(), Some(false));
        assert_eq!(root.enable(), None);
        assert_eq!(root.take_enable(), None);
    }

    #[test]
    fn object_mut_initializes_lazily() {
        let mut root = Root::new();
        assert!(root.child().is_none());
        root.child_mut().set_name("lazy");
        assert_eq!(root.child().and_then(Leaf::name), Some("lazy"));
    }

    #[test]
    fn with_table_appends_rows() {
        let root = Root::new()
            .with_leaves([Leaf::new().with_instance(1)])
            .with_leaves([Leaf::new().with_instance(2)]);
        let instances: Vec<_> = root.leaves().iter().filter_map(Leaf::instance).collect();
        assert_eq!(instances, vec![&1, &2]);
    }

    #[test]
    fn set_table_replaces_rows() {
        let mut root = Root::new().with_leaves([Leaf::new(), Leaf::new()]);
        root.set_leaves(vec![Leaf::new().with_name("only")]);
        assert_eq!(root.leaves().len(), 1);
        root.leaves_mut().clear();
        assert!(root.is_empty());
    }

    #[test]
    fn object_name_is_declared() {
        assert_eq!(Root::OBJECT_NAME, "Test.");
        assert_eq!(Leaf::OBJECT_NAME, "Test.Leaf.{i}.");
    }

    #[test]
    fn count_objects_walks_children_and_rows() {
        let root = Root::new()
            .with_child(Leaf::new())
            .with_leaves([Leaf::new(), Leaf::new()]);
        let mut counts = Vec::new();
        root.count_objects(&mut counts);
        assert_eq!(
            counts,
            vec![
                ObjectCount { object: "Test.", instances: 1 },
                ObjectCount { object: "Test.Leaf.{i}.", instances: 3 },
            ]
        );
    }

    #[test]
    fn enum_uses_standard_spelling() {
        assert_eq!(Mode::Misconfigured.to_string(), "Error_Misconfigured");
        assert_eq!("Open".parse::<Mode>().unwrap(), Mode::Open);
        assert!("open".parse::<Mode>().is_err());
        for mode in Mode::iter() {
            assert_eq!(mode.as_str().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn unset_fields_are_not_serialized() {
        let root = Root::new().with_enable(true);
        let json = serde_json::to_value(&root).unwrap();
        assert_eq!(json, serde_json::json!({ "Enable": true }));
    }

    #[test]
    fn enum_rejects_unknown_value() {
        let err = serde_json::from_str::<Root>(r#"{"Mode":"Closed"}"#).unwrap_err();
        assert!(err.to_string().contains("Closed"), "{err}");
    }
}
