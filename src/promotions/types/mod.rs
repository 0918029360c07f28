//! Promotion Types

pub mod buy_one_get_one_free;
pub mod ten_percent_off;

pub use buy_one_get_one_free::BuyOneGetOneFree;
pub use ten_percent_off::TenPercentOff;
