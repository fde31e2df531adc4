pub mod bar_chart;
pub mod csv_download;
pub mod error_boundary;
pub mod filter_panel;
pub mod job_table;
pub mod kpi_cards;
pub mod navbar;
pub mod notifications;
pub mod pagination_controls;
pub mod section_card;
pub mod suspend_boundary;
