mod notification;
mod status;
mod toast;

pub mod dtos {
    pub use crate::notification::dtos::*;
    pub use crate::toast::dtos::*;
}

pub use crate::notification::api::*;
pub use crate::status::api::*;
pub use crate::toast::api::*;
