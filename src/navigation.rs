//! Previous/next navigation between the sections of a course.
//!
//! [`SectionNavigation`] walks the page chain outwards from one section and
//! picks the nearest sibling in each direction that the current user can
//! see. The result is computed once per instance and shared as an
//! [`Rc<NavigationData>`].

use std::{
    collections::{BTreeMap, HashSet},
    rc::Rc,
};

use serde::Serialize;
use tracing::debug;

use crate::{
    course::{Course, CourseFormat, PageId, SectionInfo, SectionRef},
    error::{Direction, Error, Result},
    links::SectionLinks,
    render::{NamedTemplatable, Renderer},
};

pub const TEMPLATE_NAME: &str = "local/content/sectionnavigation.html";

/// Context handed to the section navigation template.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct NavigationData {
    pub previousurl: String,
    pub nexturl: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previousname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nextname: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub hasprevious: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub hasnext: bool,
    pub larrow: String,
    pub rarrow: String,
    pub currentsection: u32,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// A neighbouring section as shown in the widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionLink {
    pub name: String,
    pub url: String,
}

impl NavigationData {
    pub fn new(
        larrow: String,
        rarrow: String,
        currentsection: u32,
        previous: Option<SectionLink>,
        next: Option<SectionLink>,
    ) -> Self {
        let hasprevious = previous.is_some();
        let hasnext = next.is_some();
        let (previousname, previousurl) = split(previous);
        let (nextname, nexturl) = split(next);

        Self {
            previousurl,
            nexturl,
            previousname,
            nextname,
            hasprevious,
            hasnext,
            larrow,
            rarrow,
            currentsection,
        }
    }
}

fn split(link: Option<SectionLink>) -> (Option<String>, String) {
    match link {
        Some(link) => (Some(link.name), link.url),
        None => (None, String::new()),
    }
}

pub struct SectionNavigation {
    format: Rc<dyn CourseFormat>,
    section: SectionInfo,
    sectionno: u32,
    data: Option<Rc<NavigationData>>,
}

impl SectionNavigation {
    pub fn new(format: Rc<dyn CourseFormat>, section: impl Into<SectionRef>) -> Result<Self> {
        let section = format.section(&section.into())?;
        let sectionno = section.section;

        Ok(Self {
            format,
            section,
            sectionno,
            data: None,
        })
    }

    pub fn section(&self) -> &SectionInfo {
        &self.section
    }

    pub fn section_number(&self) -> u32 {
        self.sectionno
    }

    /// Computes the navigation data on first use and returns the cached
    /// value afterwards, even if the course has changed in between.
    pub fn export_for_template(
        &mut self,
        output: &dyn Renderer,
        links: &dyn SectionLinks,
    ) -> Result<Rc<NavigationData>> {
        if let Some(data) = &self.data {
            return Ok(data.clone());
        }

        let course = self.format.course();
        let sections = self.format.sections();

        let previous = self.nearest_visible(&sections, Direction::Previous)?;
        let next = self.nearest_visible(&sections, Direction::Next)?;

        let data = Rc::new(NavigationData::new(
            output.larrow(),
            output.rarrow(),
            self.sectionno,
            previous.map(|s| link_for(links, &course, s)).transpose()?,
            next.map(|s| link_for(links, &course, s)).transpose()?,
        ));

        debug!(
            section = self.sectionno,
            previous = ?data.previousname,
            next = ?data.nextname,
            "computed section navigation"
        );

        self.data = Some(data.clone());
        Ok(data)
    }

    fn nearest_visible<'s>(
        &self,
        sections: &'s BTreeMap<PageId, SectionInfo>,
        direction: Direction,
    ) -> Result<Option<&'s SectionInfo>> {
        let step = |section: &SectionInfo| match direction {
            Direction::Previous => section.prev_page_id,
            Direction::Next => section.next_page_id,
        };

        let mut visited = HashSet::from([self.section.id]);
        let mut link = step(&self.section);

        // a well formed chain visits every other section at most once
        for _ in 0..sections.len() {
            let Some(id) = link else {
                return Ok(None);
            };
            if !visited.insert(id) {
                break;
            }
            let sibling = sections.get(&id).ok_or(Error::MissingPage(id))?;

            if sibling.user_visible {
                return Ok(Some(sibling));
            }

            link = step(sibling);
        }

        match link {
            None => Ok(None),
            Some(_) => Err(Error::CorruptChain {
                from: self.section.id,
                direction,
            }),
        }
    }
}

fn link_for(
    links: &dyn SectionLinks,
    course: &Course,
    section: &SectionInfo,
) -> Result<SectionLink> {
    Ok(SectionLink {
        name: links.section_name(course, section)?,
        url: links.section_url(course, section)?.into(),
    })
}

impl NamedTemplatable for SectionNavigation {
    fn template_name(&self) -> &'static str {
        TEMPLATE_NAME
    }

    fn template_context(
        &mut self,
        output: &dyn Renderer,
        links: &dyn SectionLinks,
    ) -> Result<tera::Context> {
        let data = self.export_for_template(output, links)?;

        Ok(tera::Context::from_serialize(&*data)?)
    }
}
