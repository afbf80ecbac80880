pub mod daily;
pub mod portfolio;
pub mod rules;
pub mod stock_detail;
