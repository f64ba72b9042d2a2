use egui::{ColorImage, Context, TextureHandle};
use rayon::prelude::*;
use std::collections::HashSet;
use std::sync::{mpsc, Arc};

use crate::core::artwork::ImageReference;
use crate::core::asset_loader::{AssetLoader, LoadError};
use crate::core::catalog::Catalog;
use crate::core::image_cache::ImageCache;

type Loaded = (usize, Result<ColorImage, LoadError>);

/// Catalog indices worth decoding for `current`: the current one first, then
/// neighbours by increasing distance, next before previous.
pub fn indices_around(current: usize, len: usize, range: usize) -> Vec<usize> {
    if current >= len {
        return Vec::new();
    }

    let mut indices = vec![current];
    for distance in 1..=range {
        if let Some(next) = current.checked_add(distance).filter(|i| *i < len) {
            indices.push(next);
        }
        if let Some(prev) = current.checked_sub(distance) {
            indices.push(prev);
        }
    }
    indices
}

/// Decodes artwork images off the UI thread.
///
/// Only the UI thread touches `pending` and `failed`; workers hand their
/// results back over a channel that [`process_loaded_images`] drains.
///
/// [`process_loaded_images`]: PreloadManager::process_loaded_images
pub struct PreloadManager {
    image_receiver: mpsc::Receiver<Loaded>,
    image_sender: mpsc::Sender<Loaded>,
    pending: HashSet<usize>,
    failed: HashSet<usize>,
    preload_range: usize,
    loader: AssetLoader,
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl PreloadManager {
    pub fn new(preload_range: usize) -> Self {
        let (sender, receiver) = mpsc::channel();

        let pool = match rayon::ThreadPoolBuilder::new()
            .num_threads(num_cpus::get().clamp(1, 4))
            .thread_name(|i| format!("art-decode-{}", i))
            .build()
        {
            Ok(pool) => Some(Arc::new(pool)),
            Err(e) => {
                log::warn!("Falling back to the global rayon pool: {}", e);
                None
            }
        };

        Self {
            image_receiver: receiver,
            image_sender: sender,
            pending: HashSet::new(),
            failed: HashSet::new(),
            preload_range,
            loader: AssetLoader::new(),
            pool,
        }
    }

    /// Starts decoding the artwork at `current` and its neighbours, skipping
    /// anything already cached, in flight, or known to fail.
    pub fn preload_around(
        &mut self,
        ctx: &Context,
        catalog: &Catalog,
        current: usize,
        image_cache: &ImageCache<usize, TextureHandle>,
    ) {
        let batch: Vec<(usize, ImageReference)> =
            indices_around(current, catalog.len(), self.preload_range)
                .into_iter()
                .filter(|i| {
                    !image_cache.contains(i) && !self.pending.contains(i) && !self.failed.contains(i)
                })
                .map(|i| (i, catalog.get(i).image().clone()))
                .collect();

        if batch.is_empty() {
            return;
        }

        log::debug!(
            "Decoding artworks {:?} around position {}",
            batch.iter().map(|(i, _)| *i).collect::<Vec<_>>(),
            current
        );
        self.pending.extend(batch.iter().map(|(i, _)| *i));
        self.spawn_decode(ctx.clone(), batch);
    }

    fn spawn_decode(&self, ctx: Context, batch: Vec<(usize, ImageReference)>) {
        let sender = self.image_sender.clone();
        let loader = self.loader.clone();

        let job = move || {
            batch
                .into_par_iter()
                .map(|(index, reference)| (index, loader.load(&reference)))
                .for_each_with(sender, |sender, loaded| {
                    // The receiver only goes away when the window closes.
                    let _ = sender.send(loaded);
                });
            ctx.request_repaint();
        };

        match &self.pool {
            Some(pool) => pool.spawn(job),
            None => rayon::spawn(job),
        }
    }

    /// Uploads finished decodes as textures. Must run on the UI thread.
    pub fn process_loaded_images(
        &mut self,
        ctx: &Context,
        catalog: &Catalog,
        image_cache: &mut ImageCache<usize, TextureHandle>,
    ) {
        while let Ok((index, result)) = self.image_receiver.try_recv() {
            self.pending.remove(&index);
            match result {
                Ok(color_image) => {
                    let texture = ctx.load_texture(
                        format!("artwork_{}", index),
                        color_image,
                        egui::TextureOptions::LINEAR,
                    );
                    image_cache.insert(index, texture);
                }
                Err(e) => {
                    log::warn!(
                        "Could not load image for '{}' ({}): {}",
                        catalog.get(index).title(),
                        catalog.get(index).image(),
                        e
                    );
                    self.failed.insert(index);
                }
            }
        }
    }

    pub fn is_failed(&self, index: usize) -> bool {
        self.failed.contains(&index)
    }
}
