use crate::refs::{ObjectReferences, RefType};
use chrono::{DateTime, Datelike, FixedOffset, Local, Timelike};
use pdf_writer::{Date, Pdf, TextStr};

const DEFAULT_CREATOR: &str = concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));

/// Document metadata shown by PDF viewers, i.e. title and author
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Info {
    pub title: Option<String>,
    /// No prescribed format
    pub author: Option<String>,
    pub subject: Option<String>,
    /// Adobe Acrobat suggests a comma separated list
    pub keywords: Option<String>,
    /// The program that made the labels; defaults to this crate
    pub creator: Option<String>,
    /// When the document was made; defaults to the time it is written
    pub created: Option<DateTime<FixedOffset>>,
}

impl Info {
    /// An info block with nothing set
    pub fn new() -> Info {
        Info::default()
    }

    pub fn title<S: ToString>(&mut self, title: S) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn author<S: ToString>(&mut self, author: S) -> &mut Self {
        self.author = Some(author.to_string());
        self
    }

    pub fn subject<S: ToString>(&mut self, subject: S) -> &mut Self {
        self.subject = Some(subject.to_string());
        self
    }

    pub fn keywords<S: ToString>(&mut self, keywords: S) -> &mut Self {
        self.keywords = Some(keywords.to_string());
        self
    }

    pub fn creator<S: ToString>(&mut self, creator: S) -> &mut Self {
        self.creator = Some(creator.to_string());
        self
    }

    /// Pin the creation date, i.e. to make output reproducible
    pub fn created(&mut self, created: DateTime<FixedOffset>) -> &mut Self {
        self.created = Some(created);
        self
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let mut dict = writer.document_info(refs.gen(RefType::Info));

        if let Some(title) = &self.title {
            dict.title(TextStr(title.as_str()));
        }
        if let Some(author) = &self.author {
            dict.author(TextStr(author.as_str()));
        }
        if let Some(subject) = &self.subject {
            dict.subject(TextStr(subject.as_str()));
        }
        if let Some(keywords) = &self.keywords {
            dict.keywords(TextStr(keywords.as_str()));
        }

        dict.creator(TextStr(self.creator.as_deref().unwrap_or(DEFAULT_CREATOR)));
        let created = self.created.unwrap_or_else(|| {
            let now = Local::now();
            now.with_timezone(now.offset())
        });
        dict.creation_date(pdf_date(&created));
    }
}

fn pdf_date(at: &DateTime<FixedOffset>) -> Date {
    let offset_minutes = at.offset().local_minus_utc() / 60;

    Date::new(at.year() as u16)
        .month(at.month() as u8)
        .day(at.day() as u8)
        .hour(at.hour() as u8)
        .minute(at.minute() as u8)
        .second(at.second() as u8)
        .utc_offset_hour((offset_minutes / 60) as i8)
        .utc_offset_minute((offset_minutes % 60).unsigned_abs() as u8)
}
