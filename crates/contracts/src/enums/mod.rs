pub mod view_kind;

pub use view_kind::ViewKind;
