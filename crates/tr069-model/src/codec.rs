//! Reading and writing whole parameter trees.
//!
//! A [`Document`] holds one data-model root (`Device`, `FAPService` or
//! `STBService`). XML documents are keyed by their root element name; JSON
//! and YAML documents wrap the root in a single-key map, e.g.
//! `{"Device": {"IPsec": {...}}}`.

use std::fmt;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::debug;

use crate::device::Device;
use crate::error::ModelError;
use crate::fap::FapService;
use crate::macros::{ObjectCount, ParameterObject};
use crate::stb::StbService;

// ── Format ──────────────────────────────────────────────────────────

/// Serialization format of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    Xml,
    Json,
    Yaml,
}

impl Format {
    /// Detect the format from a file extension (`.xml`, `.json`, `.yaml`/`.yml`).
    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("xml") => Ok(Self::Xml),
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(ModelError::UnknownFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

// ── DataModel ───────────────────────────────────────────────────────

/// Which data-model root a document carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum DataModel {
    /// TR-181 `Device.`
    Device,
    /// TR-196 `FAPService.{i}.`
    FapService,
    /// TR-135 `STBService.{i}.`
    StbService,
}

impl DataModel {
    pub fn root_element(self) -> &'static str {
        match self {
            Self::Device => Device::ROOT_ELEMENT,
            Self::FapService => FapService::ROOT_ELEMENT,
            Self::StbService => StbService::ROOT_ELEMENT,
        }
    }

    pub fn from_root_element(element: &str) -> Result<Self, ModelError> {
        match element {
            Device::ROOT_ELEMENT => Ok(Self::Device),
            FapService::ROOT_ELEMENT => Ok(Self::FapService),
            StbService::ROOT_ELEMENT => Ok(Self::StbService),
            other => Err(ModelError::UnknownRoot {
                element: other.to_owned(),
            }),
        }
    }
}

/// Name of the first element in an XML document, without namespace prefix.
pub fn root_element(xml: &str) -> Result<String, ModelError> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                return Ok(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
            }
            Event::Eof => return Err(ModelError::EmptyDocument),
            _ => {}
        }
    }
}

// ── Document ────────────────────────────────────────────────────────

/// Options for [`Document::encode`].
#[derive(Debug, Clone, Copy)]
pub struct EncodeOptions {
    /// Indent XML and JSON output. YAML is always block-formatted.
    pub pretty: bool,
    /// Spaces per XML nesting level when `pretty` is set.
    pub indent: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: 2,
        }
    }
}

/// A complete parameter tree under one data-model root.
// One document is held at a time; boxing would only add a hop to every match.
#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Document {
    #[serde(rename = "Device")]
    Device(Device),
    #[serde(rename = "FAPService")]
    FapService(FapService),
    #[serde(rename = "STBService")]
    StbService(StbService),
}

impl Document {
    pub fn model(&self) -> DataModel {
        match self {
            Self::Device(_) => DataModel::Device,
            Self::FapService(_) => DataModel::FapService,
            Self::StbService(_) => DataModel::StbService,
        }
    }

    /// Decode a document, detecting the root from its content.
    pub fn decode(input: &str, format: Format) -> Result<Self, ModelError> {
        match format {
            Format::Xml => {
                let model = DataModel::from_root_element(&root_element(input)?)?;
                Self::decode_as(input, format, model)
            }
            Format::Json => {
                let doc: Self = serde_json::from_str(input)?;
                debug!(%format, model = %doc.model(), "decoded document");
                Ok(doc)
            }
            Format::Yaml => {
                let doc: Self = serde_yaml::with::singleton_map::deserialize(
                    serde_yaml::Deserializer::from_str(input),
                )?;
                debug!(%format, model = %doc.model(), "decoded document");
                Ok(doc)
            }
        }
    }

    /// Decode a document whose root is known up front.
    ///
    /// For JSON and YAML the input is the bare root object, without the
    /// single-key wrapper [`Document::decode`] expects. For XML the root
    /// element name is not checked.
    pub fn decode_as(input: &str, format: Format, model: DataModel) -> Result<Self, ModelError> {
        debug!(%format, %model, "decoding document");
        let doc = match model {
            DataModel::Device => Self::Device(decode_root(input, format)?),
            DataModel::FapService => Self::FapService(decode_root(input, format)?),
            DataModel::StbService => Self::StbService(decode_root(input, format)?),
        };
        Ok(doc)
    }

    pub fn encode(&self, format: Format, options: &EncodeOptions) -> Result<String, ModelError> {
        debug!(%format, model = %self.model(), pretty = options.pretty, "encoding document");
        match format {
            Format::Xml => match self {
                Self::Device(root) => encode_xml(root, Device::ROOT_ELEMENT, options),
                Self::FapService(root) => encode_xml(root, FapService::ROOT_ELEMENT, options),
                Self::StbService(root) => encode_xml(root, StbService::ROOT_ELEMENT, options),
            },
            Format::Json if options.pretty => Ok(serde_json::to_string_pretty(self)?),
            Format::Json => Ok(serde_json::to_string(self)?),
            Format::Yaml => {
                let mut buf = Vec::new();
                serde_yaml::with::singleton_map::serialize(
                    self,
                    &mut serde_yaml::Serializer::new(&mut buf),
                )?;
                Ok(String::from_utf8_lossy(&buf).into_owned())
            }
        }
    }

    /// Every object present in the tree with its instance count, in
    /// document order.
    pub fn object_counts(&self) -> Vec<ObjectCount> {
        let mut counts = Vec::new();
        match self {
            Self::Device(root) => root.count_objects(&mut counts),
            Self::FapService(root) => root.count_objects(&mut counts),
            Self::StbService(root) => root.count_objects(&mut counts),
        }
        counts
    }

    /// Row counts of the multi-instance tables in the document.
    pub fn table_summary(&self) -> Vec<ObjectCount> {
        let mut counts = self.object_counts();
        counts.retain(|c| c.object.ends_with("{i}."));
        counts
    }

    /// A skeleton document: every single-instance object present and one
    /// row, instance 1, in every table. Parameters are left unset.
    pub fn template(model: DataModel) -> Self {
        match model {
            DataModel::Device => Self::Device(device_template()),
            DataModel::FapService => Self::FapService(fap_template()),
            DataModel::StbService => Self::StbService(stb_template()),
        }
    }
}

impl From<Device> for Document {
    fn from(root: Device) -> Self {
        Self::Device(root)
    }
}

impl From<FapService> for Document {
    fn from(root: FapService) -> Self {
        Self::FapService(root)
    }
}

impl From<StbService> for Document {
    fn from(root: StbService) -> Self {
        Self::StbService(root)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} document", self.model().root_element())
    }
}

fn decode_root<T>(input: &str, format: Format) -> Result<T, ModelError>
where
    T: for<'de> Deserialize<'de>,
{
    match format {
        Format::Xml => Ok(quick_xml::de::from_str(input)?),
        Format::Json => Ok(serde_json::from_str(input)?),
        Format::Yaml => Ok(serde_yaml::from_str(input)?),
    }
}

fn encode_xml<T: Serialize>(
    root: &T,
    element: &str,
    options: &EncodeOptions,
) -> Result<String, ModelError> {
    let mut out = String::new();
    let mut ser = quick_xml::se::Serializer::with_root(&mut out, Some(element))?;
    if options.pretty {
        ser.indent(' ', options.indent);
    }
    root.serialize(ser)?;
    Ok(out)
}

// ── Templates ───────────────────────────────────────────────────────

fn device_template() -> Device {
    use crate::device::{ChildSa, Filter, Ikev2Sa, Profile, ReceivedCpAttr, SentCpAttr, Tunnel};

    let mut device = Device::new();
    let ipsec = device.ipsec_mut();
    ipsec.stats_mut();
    ipsec.filters_mut().push(Filter::new().with_instance(1));
    ipsec.profiles_mut().push(
        Profile::new()
            .with_instance(1)
            .with_sent_cp_attrs([SentCpAttr::new().with_instance(1)]),
    );

    let mut tunnel = Tunnel::new().with_instance(1);
    tunnel.stats_mut();
    ipsec.tunnels_mut().push(tunnel);

    let mut child = ChildSa::new().with_instance(1);
    child.stats_mut();
    let mut sa = Ikev2Sa::new()
        .with_instance(1)
        .with_received_cp_attrs([ReceivedCpAttr::new().with_instance(1)])
        .with_child_sas([child]);
    sa.stats_mut();
    ipsec.ikev2_sas_mut().push(sa);

    device
}

fn fap_template() -> FapService {
    let mut fap = FapService::new().with_instance(1);
    let umts = fap.cell_config_mut().umts_mut();

    let cn = umts.cn_mut();
    cn.cs_domain_mut();
    cn.ps_domain_mut();

    let ran = umts.ran_mut();
    ran.rf_mut();
    ran.cell_selection_mut();
    ran.cell_restriction_mut();
    ran.drx_mut();
    ran.power_control_mut();
    ran.rrc_timers_mut();

    fap
}

fn stb_template() -> StbService {
    use crate::stb::{DvbtService, FrontEnd, LogicalChannel};

    let mut front_end = FrontEnd::new().with_instance(1);
    let dvbt = front_end.dvbt_mut();
    dvbt.modulation_mut();
    dvbt.service_mut();
    dvbt.install_mut();
    dvbt.logical_channel_connect_mut();
    dvbt.service_list_database_mut().logical_channels_mut().push(
        LogicalChannel::new()
            .with_instance(1)
            .with_services([DvbtService::new().with_instance(1)]),
    );

    let mut stb = StbService::new().with_instance(1);
    stb.components_mut().front_ends_mut().push(front_end);
    stb
}
