//! 服务层 - 服务器核心服务
//!
//! # 服务列表
//!
//! - [`HttpService`] - HTTP 服务器 (路由缓存 + oneshot)
//! - [`StoreOrderSubmitter`] - 订单提交协作者

pub mod http;
pub mod order_submitter;

pub use http::HttpService;
pub use order_submitter::StoreOrderSubmitter;
