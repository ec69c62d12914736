//! 全局错误类型定义
//! 清洗器本身永不失败，错误只出现在存储与 URL 边界

use thiserror::Error;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum PortfolioError {
    // 存储相关错误
    #[error("存储操作失败：{0}")]
    StorageError(String),
    #[error("存储键不存在：{0}")]
    StorageKeyMissing(String),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("URL解析失败：{0}")]
    UrlError(#[from] UrlParseError),
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type PfResult<T> = Result<T, PortfolioError>;
