use std::fmt;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use serde::Serialize;

use crate::text_utils::parse_display_date;
use crate::topic::Topic;

/// Departure-board status shown next to each post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    #[serde(rename = "ON TIME")]
    OnTime,
    #[serde(rename = "DELAYED")]
    Delayed,
    #[serde(rename = "BOARDING")]
    Boarding,
    #[serde(rename = "DEPARTED")]
    Departed,
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::OnTime => "ON TIME",
            Status::Delayed => "DELAYED",
            Status::Boarding => "BOARDING",
            Status::Departed => "DEPARTED",
        };
        write!(f, "{}", label)
    }
}

/// A blog post record. Authored at build time, immutable afterwards.
///
/// `date` keeps the display form ("November 25, 2025"); the catalog loader
/// guarantees it parses, so `date_parsed` only fails on hand-built records.
/// `content` is an opaque Markdown-superset blob (GFM tables, math, raw
/// HTML and footnote anchors) handed to the renderer as-is.
#[derive(Debug, Clone, Serialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub topic: Topic,
    pub author: String,
    pub status: Status,
    pub content: String,
}

impl BlogPost {
    pub fn date_parsed(&self) -> Result<NaiveDate, String> {
        parse_display_date(&self.date)
    }
}

impl Display for BlogPost {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "id={}, date={}, topic={}, author={}, status={}\ntitle={} - {}",
               self.id,
               self.date,
               self.topic,
               self.author,
               self.status,
               self.title,
               self.subtitle,
        )
    }
}
