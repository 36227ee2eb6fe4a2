//! Typed bindings for TR-069 data models.
//!
//! Each standard object is a plain struct whose parameters are optional,
//! whose single-instance children are created on demand and whose
//! multi-instance tables are ordered row lists. The serde mapping follows
//! the data-model XML layout, so a CPE parameter dump decodes directly:
//!
//! ```ignore
//! let doc = Document::decode(&xml, Format::Xml)?;
//! if let Document::Device(device) = &doc {
//!     for filter in device.ipsec().map(Ipsec::filters).unwrap_or_default() {
//!         println!("{:?} {:?}", filter.instance(), filter.dest_ip());
//!     }
//! }
//! ```
//!
//! Modeled subtrees: `Device.IPsec.` (TR-181), `FAPService.{i}.CellConfig.UMTS.`
//! (TR-196) and `STBService.{i}.Components.FrontEnd.{i}.DVBT.` (TR-135).

pub mod codec;
pub mod device;
pub mod error;
pub mod fap;
pub mod macros;
pub mod stb;
pub mod types;

// ── Primary re-exports ──────────────────────────────────────────────
pub use codec::{DataModel, Document, EncodeOptions, Format};
pub use error::ModelError;
pub use macros::{ObjectCount, ParameterObject};
pub use types::{DateTime, ParameterList};

pub use device::{Device, Ipsec};
pub use fap::FapService;
pub use stb::StbService;
