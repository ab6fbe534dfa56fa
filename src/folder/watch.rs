use crate::error::{CdvdError, CdvdResult};
use crate::folder::scan::get_all_files;
use log::{debug, warn};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::SystemTime;

/// A change seen under a watched directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    Created(PathBuf),
    Modified(PathBuf),
    Removed(PathBuf),
}

/// Registration with whatever delivers change events for an open disc root.
pub trait ChangeNotifier {
    fn subscribe(&mut self, root: &Path) -> CdvdResult<()>;

    fn unsubscribe_all(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FileStamp {
    len: u64,
    modified: Option<SystemTime>,
}

type Snapshot = HashMap<PathBuf, FileStamp>;

/// Notifier that compares directory snapshots whenever `poll` is called and
/// pushes the differences down a channel.
#[derive(Debug)]
pub struct PollingNotifier {
    sender: Sender<ChangeEvent>,
    roots: Vec<(PathBuf, Snapshot)>,
}

impl PollingNotifier {
    pub fn channel() -> (Self, Receiver<ChangeEvent>) {
        let (sender, receiver) = channel();
        (
            Self {
                sender,
                roots: Vec::new(),
            },
            receiver,
        )
    }

    pub fn watched(&self) -> impl Iterator<Item = &Path> {
        self.roots.iter().map(|(root, _)| root.as_path())
    }

    /// Rescans every watched root and sends one event per difference.
    /// Returns the number of events sent.
    pub fn poll(&mut self) -> CdvdResult<usize> {
        let mut sent = 0;

        for (root, previous) in &mut self.roots {
            let current = snapshot(root)?;
            let events = diff(previous, &current);
            *previous = current;

            for event in events {
                debug!("Change under {root:?}: {event:?}");
                if self.sender.send(event).is_err() {
                    warn!("Change event receiver dropped, discarding events");
                    return Ok(sent);
                }
                sent += 1;
            }
        }

        Ok(sent)
    }
}

impl ChangeNotifier for PollingNotifier {
    fn subscribe(&mut self, root: &Path) -> CdvdResult<()> {
        if !root.is_dir() {
            return Err(CdvdError::WatchFailure(root.to_path_buf()));
        }

        let snapshot = snapshot(root).map_err(|_| CdvdError::WatchFailure(root.to_path_buf()))?;
        self.roots.push((root.to_path_buf(), snapshot));
        Ok(())
    }

    fn unsubscribe_all(&mut self) {
        self.roots.clear();
    }
}

fn snapshot(root: &Path) -> CdvdResult<Snapshot> {
    let mut snapshot = Snapshot::new();

    for path in get_all_files(root)? {
        // the file may vanish between listing and stat
        let Ok(metadata) = fs::metadata(&path) else {
            continue;
        };
        snapshot.insert(
            path,
            FileStamp {
                len: metadata.len(),
                modified: metadata.modified().ok(),
            },
        );
    }

    Ok(snapshot)
}

fn diff(previous: &Snapshot, current: &Snapshot) -> Vec<ChangeEvent> {
    let mut events = Vec::new();

    for (path, stamp) in current {
        match previous.get(path) {
            None => events.push(ChangeEvent::Created(path.clone())),
            Some(old) if old != stamp => events.push(ChangeEvent::Modified(path.clone())),
            Some(_) => {}
        }
    }

    for path in previous.keys() {
        if !current.contains_key(path) {
            events.push(ChangeEvent::Removed(path.clone()));
        }
    }

    events.sort_by(|a, b| event_path(a).cmp(event_path(b)));
    events
}

fn event_path(event: &ChangeEvent) -> &Path {
    match event {
        ChangeEvent::Created(path) | ChangeEvent::Modified(path) | ChangeEvent::Removed(path) => {
            path
        }
    }
}
