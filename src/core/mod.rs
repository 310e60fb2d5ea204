pub mod catalog;
pub mod selection;
pub mod session;
pub mod transfer;

pub use crate::domain::model::{Character, CharacterId, ImportPolicy, Team, Theme};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
