pub mod job_market_api;
