//! UIコンポーネント
//!
//! いずれも上位の状態を消費する純粋な描画側。FilterState/SearchResultを
//! 直接書き換えず、必ずSearchControllerの公開メソッドを通す。

pub mod alerts_table;
pub mod badges;
pub mod charts_panel;
pub mod header;
pub mod kpi_grid;
pub mod pagination;
pub mod results_table;
pub mod search_panel;
pub mod states;
pub mod stock_status_panel;
pub mod top_products;
pub mod upload_modal;
