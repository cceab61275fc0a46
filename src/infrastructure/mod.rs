//! Infrastructure Layer - 基础设施层
//!
//! 当前只有 HTTP 一种对外表面；规划核心自身不涉及任何 I/O

pub mod http;
