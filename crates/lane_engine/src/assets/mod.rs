//! Asset management system
//!
//! Assets are addressed by relative path and resolved against the configured
//! search paths. Loaded assets live in per-type handle maps; loading the same
//! path twice returns the same handle.

pub mod image_loader;
pub mod texture;

pub use image_loader::ImageData;
pub use texture::{Texture, TextureKey, WrapMode};

use thiserror::Error;
use crate::core::AssetConfig;
use crate::foundation::collections::{DefaultKey, HandleMap, TypedHandle};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::path::PathBuf;

/// Asset handle type
pub type AssetHandle<T> = TypedHandle<T>;

/// Asset management system
pub struct AssetManager {
    asset_storages: HashMap<TypeId, Box<dyn Any>>,
    /// Handles of already loaded assets, keyed by type and cache key
    loaded: HashMap<(TypeId, String), DefaultKey>,
    config: AssetConfig,
}

impl AssetManager {
    /// Create a new asset manager
    pub fn new(config: &AssetConfig) -> Self {
        log::debug!("Asset search paths: {:?}", config.search_paths);
        Self {
            asset_storages: HashMap::new(),
            loaded: HashMap::new(),
            config: config.clone(),
        }
    }

    /// Resolve a relative asset path against the search paths
    ///
    /// Falls back to the path as given (absolute or relative to the working
    /// directory) when no search path contains it.
    pub fn resolve(&self, path: &str) -> Result<PathBuf, AssetError> {
        let found = self.config.search_paths
            .iter()
            .map(|root| PathBuf::from(root).join(path))
            .find(|candidate| candidate.is_file());

        let file_path = found.unwrap_or_else(|| PathBuf::from(path));
        if file_path.is_file() {
            Ok(file_path)
        } else {
            Err(AssetError::NotFound(path.to_string()))
        }
    }

    /// Load an asset from disk
    ///
    /// # Arguments
    /// * `path` - Path to the asset file (relative to search paths)
    ///
    /// # Returns
    /// A handle to the loaded asset
    ///
    /// # Example
    /// ```ignore
    /// let clip = assets.load::<AudioAsset>("Sound/Effects/Bang.wav")?;
    /// ```
    pub fn load<T: Asset>(&mut self, path: &str) -> Result<AssetHandle<T>, AssetError> {
        if let Some(handle) = self.cached::<T>(path) {
            return Ok(handle);
        }

        let bytes = self.read(path)?;
        let asset = T::from_bytes(&bytes)
            .map_err(|e| e.in_asset(path))?;

        log::debug!("Loaded asset {}", path);
        Ok(self.insert(path.to_string(), asset))
    }

    /// Load a texture with the sampling options carried by `key`
    pub fn load_texture(&mut self, key: &TextureKey) -> Result<AssetHandle<Texture>, AssetError> {
        let cache_key = key.cache_key();
        if let Some(handle) = self.cached::<Texture>(&cache_key) {
            return Ok(handle);
        }

        let bytes = self.read(&key.path)?;
        let image = ImageData::from_bytes(&bytes)
            .map_err(|e| e.in_asset(&key.path))?;
        let texture = Texture::new(image, key);

        log::debug!(
            "Loaded texture {} ({}x{}, {} mip levels, {:?})",
            key.path, texture.image.width, texture.image.height, texture.mip_levels, texture.wrap
        );
        Ok(self.insert(cache_key, texture))
    }

    /// Get an asset by handle
    pub fn get<T: Asset>(&self, handle: AssetHandle<T>) -> Option<&T> {
        let storage = self.asset_storages.get(&TypeId::of::<T>())?;
        storage.downcast_ref::<HandleMap<T>>()?.get(handle.key())
    }

    /// Get mutable access to an asset by handle
    pub fn get_mut<T: Asset>(&mut self, handle: AssetHandle<T>) -> Option<&mut T> {
        let storage = self.asset_storages.get_mut(&TypeId::of::<T>())?;
        storage.downcast_mut::<HandleMap<T>>()?.get_mut(handle.key())
    }

    /// Number of loaded assets of type `T`
    pub fn count<T: Asset>(&self) -> usize {
        self.asset_storages
            .get(&TypeId::of::<T>())
            .and_then(|storage| storage.downcast_ref::<HandleMap<T>>())
            .map_or(0, HandleMap::len)
    }

    fn cached<T: Asset>(&self, cache_key: &str) -> Option<AssetHandle<T>> {
        self.loaded
            .get(&(TypeId::of::<T>(), cache_key.to_string()))
            .map(|key| AssetHandle::new(*key))
    }

    fn read(&self, path: &str) -> Result<Vec<u8>, AssetError> {
        let file_path = self.resolve(path)?;
        Ok(std::fs::read(file_path)?)
    }

    fn insert<T: Asset>(&mut self, cache_key: String, asset: T) -> AssetHandle<T> {
        let type_id = TypeId::of::<T>();
        let storage = self.asset_storages
            .entry(type_id)
            .or_insert_with(|| Box::new(HandleMap::<T>::new()));

        // The storage for `type_id` is always created with `HandleMap<T>` above.
        let key = match storage.downcast_mut::<HandleMap<T>>() {
            Some(typed_storage) => typed_storage.insert(asset),
            None => unreachable!("asset storage type mismatch"),
        };

        self.loaded.insert((type_id, cache_key), key);
        AssetHandle::new(key)
    }
}

/// Asset trait for loadable resources
pub trait Asset: 'static {
    /// Load asset from raw bytes
    fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> where Self: Sized;
}

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset not found
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Failed to load asset
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),

    /// Invalid asset data
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// IO error during asset loading
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AssetError {
    /// Prefix a decode error with the asset path it came from
    fn in_asset(self, path: &str) -> Self {
        match self {
            Self::LoadFailed(message) => Self::LoadFailed(format!("{path}: {message}")),
            Self::InvalidData(message) => Self::InvalidData(format!("{path}: {message}")),
            other => other,
        }
    }
}
