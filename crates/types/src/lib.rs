pub mod color;
pub mod declaration;
pub mod geometry;
pub mod request;

pub use color::Color;
pub use declaration::{Amount, DeclarationHeader, LineItem, PaymentBreakdown, PaymentKind, PaymentRow};
pub use geometry::{PageSize, Rect, Size};
pub use request::{RenderOptions, RenderRequest};
