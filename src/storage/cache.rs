//! 存储快照管理
//! 仅处理 MemoryStore 的本地序列化（JSON）和反序列化

use tokio::fs;

use super::store::MemoryStore;
use crate::config::SiteConfig;
use crate::error::{PfResult, PortfolioError};

/// 存储快照管理器
pub struct StoreSnapshotManager;

impl StoreSnapshotManager {
    /// 从本地快照加载存储
    pub async fn load_from_file(config: &SiteConfig) -> PfResult<MemoryStore> {
        let store_path = &config.store_path;
        let data = fs::read(store_path).await?;

        let store: MemoryStore = serde_json::from_slice(&data)?;
        debug!("存储快照加载成功，路径：{}，键数量：{}", store_path.display(), store.len());

        Ok(store)
    }

    /// 加载快照；文件不存在或损坏时返回空存储
    pub async fn load_or_default(config: &SiteConfig) -> MemoryStore {
        match Self::load_from_file(config).await {
            Ok(store) => store,
            Err(e) => {
                warn!("存储快照不可用，使用空存储：{}", e);
                MemoryStore::new()
            }
        }
    }

    /// 将存储写入本地快照
    pub async fn save_to_file(config: &SiteConfig, store: &MemoryStore) -> PfResult<()> {
        let store_path = &config.store_path;
        let data = serde_json::to_vec_pretty(store)?;

        if let Some(dir) = store_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).await.map_err(|e| {
                PortfolioError::StorageError(format!("创建目录{}失败：{}", dir.display(), e))
            })?;
        }

        fs::write(store_path, &data).await?;
        debug!("存储快照写入成功，路径：{}，大小：{} 字节", store_path.display(), data.len());
        Ok(())
    }

    /// 清除本地快照
    pub async fn clear_file(config: &SiteConfig) -> PfResult<()> {
        let store_path = &config.store_path;
        if fs::try_exists(store_path).await? {
            fs::remove_file(store_path).await?;
        }
        Ok(())
    }
}
