use std::{
    collections::{BTreeMap, HashSet},
    fmt, fs,
    path::Path,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Identifier that orders sections into a navigable sequence, independent of
/// the section number.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct PageId(pub u64);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Course {
    pub id: u64,
    pub shortname: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SectionInfo {
    pub section: u32,
    pub id: PageId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "visible_by_default")]
    pub user_visible: bool,
    #[serde(default)]
    pub prev_page_id: Option<PageId>,
    #[serde(default)]
    pub next_page_id: Option<PageId>,
}

fn visible_by_default() -> bool {
    true
}

/// Either an already resolved section or something that identifies one.
#[derive(Clone, Debug)]
pub enum SectionRef {
    Info(SectionInfo),
    Number(u32),
    Page(PageId),
}

impl fmt::Display for SectionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionRef::Info(info) => write!(f, "page {}", info.id),
            SectionRef::Number(n) => write!(f, "section {n}"),
            SectionRef::Page(id) => write!(f, "page {id}"),
        }
    }
}

impl From<SectionInfo> for SectionRef {
    fn from(info: SectionInfo) -> Self {
        SectionRef::Info(info)
    }
}

impl From<u32> for SectionRef {
    fn from(section: u32) -> Self {
        SectionRef::Number(section)
    }
}

impl From<PageId> for SectionRef {
    fn from(id: PageId) -> Self {
        SectionRef::Page(id)
    }
}

pub trait CourseFormat {
    fn course(&self) -> Course;

    /// All sections of the course, keyed by page id.
    fn sections(&self) -> BTreeMap<PageId, SectionInfo>;

    fn section(&self, section: &SectionRef) -> Result<SectionInfo> {
        let mut sections = self.sections();

        let found = match section {
            SectionRef::Info(info) => sections.remove(&info.id),
            SectionRef::Page(id) => sections.remove(id),
            SectionRef::Number(n) => sections.into_values().find(|s| s.section == *n),
        };

        found.ok_or_else(|| Error::SectionNotFound(section.to_string()))
    }
}

#[derive(Deserialize)]
struct CourseFile {
    id: u64,
    shortname: String,
    #[serde(default)]
    sections: Vec<SectionInfo>,
}

/// A course format backed by a `course.toml` file.
pub struct MultitopicFormat {
    course: Course,
    sections: BTreeMap<PageId, SectionInfo>,
}

impl MultitopicFormat {
    /// Fails if two sections share a page id.
    pub fn new(course: Course, mut sections: Vec<SectionInfo>) -> Result<Self> {
        let mut seen = HashSet::new();
        if let Some(dup) = sections.iter().map(|s| s.id).find(|id| !seen.insert(*id)) {
            warn!("duplicate page id {} in course {}", dup, course.id);
            return Err(Error::DuplicatePage(dup));
        }

        let linked = sections
            .iter()
            .any(|s| s.prev_page_id.is_some() || s.next_page_id.is_some());

        if !linked {
            link_in_order(&mut sections);
        }

        Ok(Self {
            course,
            sections: sections.into_iter().map(|s| (s.id, s)).collect(),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let file: CourseFile = toml::from_str(&text)?;

        debug!(
            "loaded course {} with {} sections from {}",
            file.shortname,
            file.sections.len(),
            path.display()
        );

        Self::new(
            Course {
                id: file.id,
                shortname: file.shortname,
            },
            file.sections,
        )
    }
}

impl CourseFormat for MultitopicFormat {
    fn course(&self) -> Course {
        self.course.clone()
    }

    fn sections(&self) -> BTreeMap<PageId, SectionInfo> {
        self.sections.clone()
    }
}

fn link_in_order(sections: &mut [SectionInfo]) {
    let ids = sections.iter().map(|s| s.id).collect::<Vec<_>>();

    for (i, section) in sections.iter_mut().enumerate() {
        section.prev_page_id = i.checked_sub(1).map(|p| ids[p]);
        section.next_page_id = ids.get(i + 1).copied();
    }
}
