#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use url::Url;

use webclass_sync::error::AppError;
use webclass_sync::models::AssignmentBatch;
use webclass_sync::sink::{AssignmentSink, SinkAck};
use webclass_sync::webclass::{FetchedPage, PortalSession};

pub const BASE_URL: &str = "https://host/";
pub const DEEP_LINK_HOST: &str = "rpwebcls.example.ac.jp";

/// One content item as WebClass renders it on a course top page.
pub fn content_item(title: &str, href: &str, category: &str, period: &str, is_new: bool) -> String {
    let badge = if is_new {
        r#"<div class="cl-contentsList_new">New</div>"#
    } else {
        ""
    };
    format!(
        r#"<section class="list-group-item cl-contentsList_listGroupItem">
  <div class="cl-contentsList_categoryLabel">{category}</div>
  <h4 class="cm-contentsList_contentName">
    {badge}
    <a href="{href}">{title}</a>
  </h4>
  <div class="cm-contentsList_contentDetailList">
    <div class="cm-contentsList_contentDetailListItem">
      <div class="cm-contentsList_contentDetailListItemLabel">実施状況</div>
      <div class="cm-contentsList_contentDetailListItemData">未実施</div>
    </div>
    <div class="cm-contentsList_contentDetailListItem">
      <div class="cm-contentsList_contentDetailListItemLabel">利用可能期間</div>
      <div class="cm-contentsList_contentDetailListItemData">
        {period}
      </div>
    </div>
  </div>
</section>"#
    )
}

pub fn panel(title: &str, items: &[String]) -> String {
    format!(
        r#"<div class="panel panel-default cl-contentsList_panel">
  <div class="panel-heading"><h3 class="panel-title">{title}</h3></div>
  <div class="list-group">{}</div>
</div>"#,
        items.join("\n")
    )
}

pub fn page(body: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>WebClass</title></head><body>{}</body></html>",
        body
    )
}

pub fn dashboard(anchors: &[(&str, &str)]) -> String {
    let links: Vec<String> = anchors
        .iter()
        .map(|(name, href)| format!(r#"<a class="list-group-item course" href="{href}">{name}</a>"#))
        .collect();
    page(&format!(
        r#"<div class="list-group">{}</div><a class="list-group-item" href="/webclass/msg_editor.php">Messages</a>"#,
        links.join("\n")
    ))
}

/// Three items in two panels.
pub fn three_item_course() -> String {
    let week_one = panel(
        "第1回",
        &[
            content_item(
                "Report 1",
                "/webclass/show_frame.php?id=abc123def&x=1",
                "レポート",
                "2024/04/01 10:00 - 2024/04/08 23:59",
                true,
            ),
            content_item(
                "Quiz 1",
                "/webclass/show_frame.php?id=0f0f0f",
                "テスト",
                "2024/04/02 09:00 - 2024/04/09 12:00",
                false,
            ),
        ],
    );
    let materials = panel(
        "資料",
        &[content_item(
            "Slides",
            "/webclass/show_frame.php?file=slides.pdf",
            "資料",
            "常時公開",
            false,
        )],
    );
    page(&format!("{}{}", week_one, materials))
}

pub enum StubResponse {
    Page(FetchedPage),
    Error(String),
}

/// Serves canned pages by absolute URL and records every request.
pub struct StubPortal {
    base_url: Url,
    dashboard_url: Url,
    responses: HashMap<String, StubResponse>,
    pub requests: Mutex<Vec<String>>,
}

impl StubPortal {
    pub fn new() -> Self {
        let base_url = Url::parse(BASE_URL).unwrap();
        let dashboard_url = base_url.join("webclass/index.php").unwrap();
        Self {
            base_url,
            dashboard_url,
            responses: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_base(base: &str) -> Self {
        let mut portal = Self::new();
        portal.base_url = Url::parse(base).unwrap();
        portal
    }

    pub fn page(mut self, url: &str, body: impl Into<String>) -> Self {
        self.responses.insert(
            url.to_string(),
            StubResponse::Page(FetchedPage {
                status: 200,
                body: body.into(),
            }),
        );
        self
    }

    pub fn status(mut self, url: &str, status: u16) -> Self {
        self.responses.insert(
            url.to_string(),
            StubResponse::Page(FetchedPage {
                status,
                body: String::new(),
            }),
        );
        self
    }

    pub fn error(mut self, url: &str, message: &str) -> Self {
        self.responses
            .insert(url.to_string(), StubResponse::Error(message.to_string()));
        self
    }

    pub fn dashboard(self, body: impl Into<String>) -> Self {
        let url = self.dashboard_url.to_string();
        self.page(&url, body)
    }

    pub fn requested(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PortalSession for StubPortal {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn dashboard_url(&self) -> &Url {
        &self.dashboard_url
    }

    async fn get(&self, url: &Url) -> Result<FetchedPage, AppError> {
        self.requests.lock().unwrap().push(url.to_string());
        match self.responses.get(url.as_str()) {
            Some(StubResponse::Page(page)) => Ok(page.clone()),
            Some(StubResponse::Error(message)) => Err(AppError::Transport(message.clone())),
            None => Ok(FetchedPage {
                status: 404,
                body: String::new(),
            }),
        }
    }
}

pub struct RecordingSink {
    pub batches: Mutex<Vec<AssignmentBatch>>,
    reply: Result<SinkAck, String>,
}

impl RecordingSink {
    pub fn accepting() -> Self {
        Self {
            batches: Mutex::new(Vec::new()),
            reply: Ok(SinkAck {
                status: "SUCCESS".to_string(),
                message: Some("written".to_string()),
            }),
        }
    }

    pub fn rejecting(message: &str) -> Self {
        Self {
            batches: Mutex::new(Vec::new()),
            reply: Err(message.to_string()),
        }
    }

    pub fn submitted(&self) -> Vec<AssignmentBatch> {
        self.batches.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssignmentSink for RecordingSink {
    async fn submit(&self, batch: &AssignmentBatch) -> Result<SinkAck, AppError> {
        self.batches.lock().unwrap().push(batch.clone());
        match &self.reply {
            Ok(ack) => Ok(ack.clone()),
            Err(message) => Err(AppError::SinkRejected(message.clone())),
        }
    }
}
