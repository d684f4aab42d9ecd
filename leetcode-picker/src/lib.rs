pub mod api;
pub mod auth;
pub mod canonical_list;
pub mod chrono_util;
pub mod commands;
pub mod config;
pub mod extractor;
pub mod problem;
pub mod problem_url;
pub mod reconcile;
pub mod store;
pub mod study_plan;
pub mod sync;
