use url::Url;

use crate::{
    course::{Course, SectionInfo},
    error::Result,
};

/// Resolves the label and address a section is linked with.
pub trait SectionLinks {
    fn section_name(&self, course: &Course, section: &SectionInfo) -> Result<String>;

    fn section_url(&self, course: &Course, section: &SectionInfo) -> Result<Url>;
}

pub struct CourseLinks {
    base_url: Url,
}

impl CourseLinks {
    pub fn new(base_url: Url) -> Self {
        CourseLinks { base_url }
    }
}

impl SectionLinks for CourseLinks {
    fn section_name(&self, _course: &Course, section: &SectionInfo) -> Result<String> {
        if let Some(name) = section.name.as_deref().map(str::trim) {
            if !name.is_empty() {
                return Ok(name.to_string());
            }
        }

        if section.section == 0 {
            Ok("General".to_string())
        } else {
            Ok(format!("Topic {}", section.section))
        }
    }

    fn section_url(&self, course: &Course, section: &SectionInfo) -> Result<Url> {
        let path = format!("course/view.php?id={}&sectionid={}", course.id, section.id);

        Ok(self.base_url.join(&path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::PageId;

    fn course() -> Course {
        Course {
            id: 42,
            shortname: "EX101".to_string(),
        }
    }

    fn section(number: u32, name: Option<&str>) -> SectionInfo {
        SectionInfo {
            section: number,
            id: PageId(300 + number as u64),
            name: name.map(str::to_string),
            user_visible: true,
            prev_page_id: None,
            next_page_id: None,
        }
    }

    fn links() -> CourseLinks {
        CourseLinks::new(Url::parse("https://lms.example.org/moodle/").unwrap())
    }

    #[test]
    fn test_explicit_name_wins() {
        let name = links()
            .section_name(&course(), &section(3, Some(" Week three ")))
            .unwrap();
        assert_eq!(name, "Week three");
    }

    #[test]
    fn test_default_names() {
        let links = links();
        let general = links.section_name(&course(), &section(0, None)).unwrap();
        let unnamed = links.section_name(&course(), &section(4, Some(""))).unwrap();

        assert_eq!(general, "General");
        assert_eq!(unnamed, "Topic 4");
    }

    #[test]
    fn test_section_url_is_relative_to_base() {
        let url = links().section_url(&course(), &section(2, None)).unwrap();
        assert_eq!(
            url.as_str(),
            "https://lms.example.org/moodle/course/view.php?id=42&sectionid=302"
        );
    }
}
