//! Shared fixtures: an in-process mock exchange, a recording render surface
//! and counting event callbacks.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use rand::Rng;
use serde_json::json;
use tokio::net::TcpListener;

use rtb_adsdk::{AdEvents, AdError, AppInfo, DeviceProfile, RenderSurface, SdkConfig};

/// What the mock exchange answers to bid requests.
#[derive(Clone, Copy)]
pub enum BidMode {
    FillHtml,
    FillVast,
    FillVastNoMediaFile,
    EmptyBody,
    EmptySeatBid,
    Http500,
}

pub struct MockExchange {
    pub addr: SocketAddr,
    pub bid_requests: Arc<AtomicUsize>,
    pub pixel_hits: Arc<AtomicUsize>,
}

struct MockState {
    mode: BidMode,
    addr: SocketAddr,
    bid_requests: Arc<AtomicUsize>,
    pixel_hits: Arc<AtomicUsize>,
}

fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

impl MockExchange {
    pub async fn start(mode: BidMode) -> Self {
        init_tracing();
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock exchange");
        let addr = listener.local_addr().expect("mock exchange addr");
        let bid_requests = Arc::new(AtomicUsize::new(0));
        let pixel_hits = Arc::new(AtomicUsize::new(0));
        let state = Arc::new(MockState {
            mode,
            addr,
            bid_requests: bid_requests.clone(),
            pixel_hits: pixel_hits.clone(),
        });
        let app = Router::new()
            .route("/", post(handle_bid))
            .route("/pixel", get(handle_pixel))
            .with_state(state);
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock exchange serve");
        });
        Self {
            addr,
            bid_requests,
            pixel_hits,
        }
    }

    pub fn config(&self) -> SdkConfig {
        SdkConfig::new(format!("http://{}", self.addr), "test-pub", "test-pass")
    }
}

async fn handle_pixel(State(state): State<Arc<MockState>>) -> StatusCode {
    state.pixel_hits.fetch_add(1, Ordering::SeqCst);
    StatusCode::OK
}

async fn handle_bid(State(state): State<Arc<MockState>>, body: String) -> Response {
    state.bid_requests.fetch_add(1, Ordering::SeqCst);
    let request: serde_json::Value = serde_json::from_str(&body).expect("bid request json");
    let imp_id = request["imp"][0]["id"].as_str().unwrap_or("imp-0").to_string();
    let nurl = format!("http://{}/pixel?src=nurl", state.addr);
    let floor = request["imp"][0]["bidfloor"].as_f64().unwrap_or(0.0);
    let price = floor * rand::thread_rng().gen_range(1.0..3.0);

    let adm = match state.mode {
        BidMode::EmptyBody => return StatusCode::OK.into_response(),
        BidMode::Http500 => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        BidMode::EmptySeatBid => {
            return Json(json!({ "id": "resp-1", "seatbid": [] })).into_response()
        }
        BidMode::FillHtml => {
            "<html><body>Mock Banner<a href=\"http://adv.example/click\">go</a></body></html>"
                .to_string()
        }
        BidMode::FillVast => format!(
            r#"<VAST version="3.0"><Ad id="a1"><InLine>
                <Impression><![CDATA[http://{addr}/pixel?src=vast_imp]]></Impression>
                <Creatives><Creative><Linear>
                    <Duration>00:00:15</Duration>
                    <TrackingEvents>
                        <Tracking event="start"><![CDATA[http://{addr}/pixel?src=start]]></Tracking>
                        <Tracking event="complete"><![CDATA[http://{addr}/pixel?src=complete]]></Tracking>
                    </TrackingEvents>
                    <MediaFiles><MediaFile delivery="progressive" type="video/mp4">http://cdn.example/video.mp4</MediaFile></MediaFiles>
                </Linear></Creative></Creatives>
            </InLine></Ad></VAST>"#,
            addr = state.addr
        ),
        BidMode::FillVastNoMediaFile => {
            r#"<VAST version="3.0"><Ad><InLine><Creatives><Creative><Linear>
                <Duration>00:00:15</Duration>
            </Linear></Creative></Creatives></InLine></Ad></VAST>"#
                .to_string()
        }
    };

    Json(json!({
        "id": "resp-1",
        "cur": "USD",
        "seatbid": [{
            "bid": [{
                "id": "bid-1",
                "impid": imp_id,
                "price": price,
                "adm": adm,
                "nurl": nurl,
                "crid": "cr-1",
                "w": 320,
                "h": 50
            }]
        }]
    }))
    .into_response()
}

/// Recording render surface double.
#[derive(Default)]
pub struct TestSurface {
    pub unavailable: AtomicBool,
    pub fail_next_load: AtomicBool,
    pub html_loads: AtomicUsize,
    pub video_loads: AtomicUsize,
    pub last_video_url: Mutex<Option<String>>,
    pub closes: AtomicUsize,
}

impl RenderSurface for TestSurface {
    fn is_available(&self) -> bool {
        !self.unavailable.load(Ordering::SeqCst)
    }

    fn load_html(&self, _html: &str) -> Result<(), AdError> {
        if self.fail_next_load.swap(false, Ordering::SeqCst) {
            return Err(AdError::Internal("render failure".to_string()));
        }
        self.html_loads.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn load_video(&self, url: &str) -> Result<(), AdError> {
        if self.fail_next_load.swap(false, Ordering::SeqCst) {
            return Err(AdError::Internal("playback failure".to_string()));
        }
        self.video_loads.fetch_add(1, Ordering::SeqCst);
        *self.last_video_url.lock().unwrap() = Some(url.to_string());
        Ok(())
    }

    fn close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}

/// Counts every callback the SDK fires.
#[derive(Default)]
pub struct Counters {
    pub loaded: AtomicUsize,
    pub failed_load: AtomicUsize,
    pub shown: AtomicUsize,
    pub failed_show: AtomicUsize,
    pub impressions: AtomicUsize,
    pub clicks: AtomicUsize,
    pub dismissed: AtomicUsize,
    pub rewards: AtomicUsize,
    pub last_error_code: AtomicI32,
}

pub fn counting_events(counters: Arc<Counters>) -> AdEvents {
    let c = counters;
    AdEvents::new()
        .on_ad_loaded({
            let c = c.clone();
            move || {
                c.loaded.fetch_add(1, Ordering::SeqCst);
            }
        })
        .on_ad_failed_to_load({
            let c = c.clone();
            move |err| {
                c.failed_load.fetch_add(1, Ordering::SeqCst);
                c.last_error_code.store(err.code(), Ordering::SeqCst);
            }
        })
        .on_ad_shown({
            let c = c.clone();
            move || {
                c.shown.fetch_add(1, Ordering::SeqCst);
            }
        })
        .on_ad_failed_to_show({
            let c = c.clone();
            move |err| {
                c.failed_show.fetch_add(1, Ordering::SeqCst);
                c.last_error_code.store(err.code(), Ordering::SeqCst);
            }
        })
        .on_ad_impression({
            let c = c.clone();
            move || {
                c.impressions.fetch_add(1, Ordering::SeqCst);
            }
        })
        .on_ad_clicked({
            let c = c.clone();
            move |_| {
                c.clicks.fetch_add(1, Ordering::SeqCst);
            }
        })
        .on_ad_dismissed({
            let c = c.clone();
            move || {
                c.dismissed.fetch_add(1, Ordering::SeqCst);
            }
        })
        .on_user_earned_reward(move || {
            c.rewards.fetch_add(1, Ordering::SeqCst);
        })
}

pub fn device_profile() -> DeviceProfile {
    DeviceProfile {
        user_agent: "Mozilla/5.0 (Linux; Android 14) TestUA".to_string(),
        make: "Google".to_string(),
        model: "Pixel 8".to_string(),
        os: "Android".to_string(),
        os_version: "14".to_string(),
        width: 412,
        height: 915,
        ppi: 420,
        pixel_ratio: 2.625,
        language: "en-US".to_string(),
        advertising_id: Some("38400000-8cf0-11bd-b23e-10b96e40000d".to_string()),
        limit_ad_tracking: false,
        connection_type: 2,
        ip: None,
        geo: None,
    }
}

pub fn app_info() -> AppInfo {
    AppInfo {
        id: "app-1".to_string(),
        name: "Test App".to_string(),
        bundle: "com.example.test".to_string(),
        store_url: None,
        version: Some("1.0.0".to_string()),
        publisher_id: Some("pub-1".to_string()),
    }
}

/// Lets fire-and-forget pixel tasks drain before asserting on hit counters.
pub async fn settle() {
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
}
