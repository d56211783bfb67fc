/// Request keys (type + optional qualifier)
mod key;
/// Component paths, the scope handles with an ancestor-chain relation
mod component;
/// Binding records and their classification tags
mod binding;
/// Declaration records (multibinding, subcomponent, optional-binding)
mod declaration;

pub use binding::*;
pub use component::*;
pub use declaration::*;
pub use key::*;
