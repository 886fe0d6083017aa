//! Per-row thumbnail loading.
//!
//! Thumbnails are decorative. Each visible row that carries an image URL owns
//! one load request keyed by its product id; the request is cancelled as soon
//! as the row leaves the visible set. Nothing here affects which presentation
//! state is shown or whether a row can be selected.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use crate::types::{Product, ProductId};

/// Load state of one row's thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailStatus {
	/// The product has no image URL.
	Missing,
	Pending,
	Loaded,
	Failed,
}

impl ThumbnailStatus {
	/// Glyph drawn in the row's image slot.
	#[must_use]
	pub fn glyph(self) -> &'static str {
		match self {
			Self::Loaded => "▣",
			Self::Pending => "◌",
			Self::Missing | Self::Failed => "□",
		}
	}
}

/// Handle given to a loader for one request.
#[derive(Debug, Clone)]
pub struct ThumbnailTicket {
	id: ProductId,
	generation: u64,
	cancelled: Arc<AtomicBool>,
}

impl ThumbnailTicket {
	#[must_use]
	pub fn id(&self) -> &ProductId {
		&self.id
	}

	/// Whether the row this request belongs to has left the visible set.
	#[must_use]
	pub fn is_cancelled(&self) -> bool {
		self.cancelled.load(Ordering::Relaxed)
	}

	fn cancel(&self) {
		self.cancelled.store(true, Ordering::Relaxed);
	}

	/// Build the completion message for this request.
	#[must_use]
	pub fn complete(&self, loaded: bool) -> ThumbnailCompletion {
		ThumbnailCompletion {
			id: self.id.clone(),
			generation: self.generation,
			loaded,
		}
	}
}

/// Result of a thumbnail request, delivered back to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailCompletion {
	pub id: ProductId,
	generation: u64,
	pub loaded: bool,
}

/// Fetches thumbnails on behalf of the panel.
pub trait ThumbnailLoader {
	/// Start loading `url`. Implementations should stop early once
	/// `ticket.is_cancelled()` and report through [`ThumbnailTicket::complete`].
	fn request(&mut self, url: &str, ticket: ThumbnailTicket);
}

#[derive(Debug)]
struct Entry {
	url: String,
	status: ThumbnailStatus,
	ticket: ThumbnailTicket,
}

/// Tracks the thumbnail request of every visible row.
#[derive(Debug, Default)]
pub struct ThumbnailTracker {
	entries: HashMap<ProductId, Entry>,
	next_generation: u64,
}

impl ThumbnailTracker {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Reconcile tracked requests with the rows currently on screen.
	///
	/// Newly visible rows with an image URL get a request; rows that are no
	/// longer visible, or whose URL changed, have their request cancelled.
	pub fn sync<'a, I>(&mut self, visible: I, loader: &mut dyn ThumbnailLoader)
	where
		I: IntoIterator<Item = &'a Product>,
	{
		let mut seen = HashSet::new();
		for product in visible {
			let Some(url) = product.image_url.as_deref() else {
				continue;
			};
			seen.insert(product.id.clone());

			if let Some(entry) = self.entries.get(&product.id) {
				if entry.url == url {
					continue;
				}
				entry.ticket.cancel();
			}

			let ticket = self.issue_ticket(&product.id);
			log::debug!("requesting thumbnail for {}", product.id);
			loader.request(url, ticket.clone());
			self.entries.insert(
				product.id.clone(),
				Entry {
					url: url.to_string(),
					status: ThumbnailStatus::Pending,
					ticket,
				},
			);
		}

		self.entries.retain(|id, entry| {
			let keep = seen.contains(id);
			if !keep {
				log::debug!("cancelling thumbnail for {id}");
				entry.ticket.cancel();
			}
			keep
		});
	}

	/// Record a completion. Completions for cancelled or superseded requests
	/// are ignored.
	pub fn complete(&mut self, completion: ThumbnailCompletion) {
		let Some(entry) = self.entries.get_mut(&completion.id) else {
			return;
		};
		if entry.ticket.generation != completion.generation {
			return;
		}
		entry.status = if completion.loaded {
			ThumbnailStatus::Loaded
		} else {
			ThumbnailStatus::Failed
		};
	}

	/// Status for a product's row.
	#[must_use]
	pub fn status(&self, product: &Product) -> ThumbnailStatus {
		if product.image_url.is_none() {
			return ThumbnailStatus::Missing;
		}
		self.entries
			.get(&product.id)
			.map_or(ThumbnailStatus::Pending, |entry| entry.status)
	}

	/// Cancel every outstanding request.
	pub fn clear(&mut self) {
		for entry in self.entries.values() {
			entry.ticket.cancel();
		}
		self.entries.clear();
	}

	#[must_use]
	pub fn tracked(&self) -> usize {
		self.entries.len()
	}

	fn issue_ticket(&mut self, id: &ProductId) -> ThumbnailTicket {
		self.next_generation += 1;
		ThumbnailTicket {
			id: id.clone(),
			generation: self.next_generation,
			cancelled: Arc::new(AtomicBool::new(false)),
		}
	}
}

impl Drop for ThumbnailTracker {
	fn drop(&mut self) {
		self.clear();
	}
}

struct LoadJob {
	url: String,
	ticket: ThumbnailTicket,
}

/// Loader that resolves local image files on a background thread.
///
/// Accepts plain paths and `file://` URLs. Remote URLs are reported as
/// failures so the row keeps its placeholder glyph.
pub struct FileThumbnailLoader {
	jobs: Sender<LoadJob>,
}

impl FileThumbnailLoader {
	/// Spawn the worker thread, returning the loader and its completion feed.
	pub fn spawn() -> std::io::Result<(Self, Receiver<ThumbnailCompletion>)> {
		let (job_tx, job_rx) = mpsc::channel::<LoadJob>();
		let (done_tx, done_rx) = mpsc::channel();

		thread::Builder::new()
			.name("thumbnail-loader".into())
			.spawn(move || {
				while let Ok(job) = job_rx.recv() {
					if job.ticket.is_cancelled() {
						continue;
					}
					let loaded = local_path(&job.url).is_some_and(|path| path.is_file());
					if !loaded {
						log::debug!("thumbnail unavailable: {}", job.url);
					}
					if done_tx.send(job.ticket.complete(loaded)).is_err() {
						break;
					}
				}
			})?;

		Ok((Self { jobs: job_tx }, done_rx))
	}
}

impl ThumbnailLoader for FileThumbnailLoader {
	fn request(&mut self, url: &str, ticket: ThumbnailTicket) {
		let job = LoadJob {
			url: url.to_string(),
			ticket,
		};
		if self.jobs.send(job).is_err() {
			log::warn!("thumbnail worker stopped; request for {url} dropped");
		}
	}
}

fn local_path(url: &str) -> Option<PathBuf> {
	if let Some(path) = url.strip_prefix("file://") {
		return Some(PathBuf::from(path));
	}
	if url.contains("://") {
		return None;
	}
	Some(PathBuf::from(url))
}
