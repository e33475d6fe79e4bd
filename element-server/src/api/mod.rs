//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 注册、登录、当前用户
//! - [`catalog`] - 产品目录
//! - [`configurator`] - 配置解析 (预览 + 订单载荷)
//! - [`orders`] - 客户订单
//! - [`visitors`] - 访客记录
//! - [`admin`] - 管理端

pub mod convert;

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod configurator;
pub mod health;
pub mod orders;
pub mod visitors;

pub use crate::utils::{AppError, AppResult};
