#![allow(dead_code)]

use async_trait::async_trait;
use camlet::catalog::types::{Camera, CameraPage, Location};
use camlet::{CamletError, CatalogApi, QueryRegion, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// In-process catalog that records every request it receives
#[derive(Default)]
pub struct MockCatalog {
    pub total: u32,
    pub list_calls: Mutex<Vec<(u32, u32)>>,
    pub id_batches: Mutex<Vec<Vec<String>>>,
    pub region_calls: Mutex<Vec<QueryRegion>>,
    pub fail_lists: AtomicBool,
    pub fail_ids: AtomicBool,
    pub region_status: Mutex<Option<u16>>,
    pub region_io_error: AtomicBool,
    pub delay: Mutex<Option<Duration>>,
}

impl MockCatalog {
    pub fn with_total(total: u32) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn list_calls(&self) -> Vec<(u32, u32)> {
        self.list_calls.lock().unwrap().clone()
    }

    pub fn id_batches(&self) -> Vec<Vec<String>> {
        self.id_batches.lock().unwrap().clone()
    }

    pub fn region_calls(&self) -> Vec<QueryRegion> {
        self.region_calls.lock().unwrap().clone()
    }

    pub fn set_fail_lists(&self, fail: bool) {
        self.fail_lists.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_ids(&self, fail: bool) {
        self.fail_ids.store(fail, Ordering::SeqCst);
    }

    /// Makes list and id lookups wait `delay` before answering
    pub fn set_delay(&self, delay: Option<Duration>) {
        *self.delay.lock().unwrap() = delay;
    }

    async fn wait(&self) {
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Camera whose title carries the usual `"<city>, "` prefix
pub fn camera(id: &str) -> Camera {
    Camera {
        id: id.to_string(),
        title: format!("Springfield, Cam {id}"),
        location: Some(Location {
            city: "Springfield".into(),
            country: "USA".into(),
            ..Location::default()
        }),
        ..Camera::default()
    }
}

fn server_error(endpoint: &str) -> CamletError {
    CamletError::Status {
        status: 503,
        endpoint: endpoint.to_string(),
    }
}

#[async_trait]
impl CatalogApi for MockCatalog {
    async fn list_page(&self, offset: u32, limit: u32) -> Result<CameraPage> {
        self.list_calls.lock().unwrap().push((offset, limit));
        self.wait().await;
        if self.fail_lists.load(Ordering::SeqCst) {
            return Err(server_error("list"));
        }
        let end = (offset + limit).min(self.total);
        Ok(CameraPage {
            offset,
            limit,
            total: self.total,
            webcams: (offset..end).map(|i| camera(&format!("l{i}"))).collect(),
        })
    }

    async fn cameras_by_ids(&self, ids: &[String]) -> Result<Vec<Camera>> {
        self.id_batches.lock().unwrap().push(ids.to_vec());
        self.wait().await;
        if self.fail_ids.load(Ordering::SeqCst) {
            return Err(server_error("list/webcam"));
        }
        Ok(ids.iter().map(|id| camera(id)).collect())
    }

    async fn cameras_in_region(&self, region: &QueryRegion) -> Result<Vec<Camera>> {
        self.region_calls.lock().unwrap().push(*region);
        if let Some(status) = *self.region_status.lock().unwrap() {
            return Err(CamletError::Status {
                status,
                endpoint: "map".into(),
            });
        }
        if self.region_io_error.load(Ordering::SeqCst) {
            return Err(std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out").into());
        }
        Ok(vec![camera("m1"), camera("m2")])
    }
}
