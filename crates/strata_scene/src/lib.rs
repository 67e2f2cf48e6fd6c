//! Scene-side glue between time-varying properties and renderer materials.
//!
//! Raw interval records ([`IntervalData`]) are decoded into property slots by
//! a [`MaterialBinding`]; once per frame the binding pulls every slot at the
//! current time and writes the results into a [`Material`] uniform record.
//!
//! [`Material`]: strata_resources::Material

pub mod binding;
pub mod dynamic_material;
pub mod interval;
pub mod packet;
pub mod particles;

pub use binding::{ColorMaterialBinding, GridMaterialBinding, MaterialBinding, ResolveReport, SlotOutcome};
pub use dynamic_material::DynamicMaterialProperty;
pub use interval::IntervalData;
pub use packet::{PacketSample, PacketUpdate, PacketValue, apply_packet_updates, decode_packet_data, process_packet_data};
pub use particles::{Particle, SphereEmitter};
