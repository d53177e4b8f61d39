use std::{fs, path::Path, rc::Rc};

use tempfile::tempdir;

use section_nav::{
    config::Config,
    course::{MultitopicFormat, PageId},
    links::CourseLinks,
    navigation::SectionNavigation,
    render::TemplateRenderer,
    Error,
};

fn write_course(dir: &Path) {
    fs::write(
        dir.join("config.toml"),
        "title = \"Example\"\nbase_url = \"https://lms.example.org/\"\n",
    )
    .unwrap();

    fs::write(
        dir.join("course.toml"),
        r#"
id = 42
shortname = "EX101"

[[sections]]
section = 0
id = 100
name = "General"

[[sections]]
section = 1
id = 101
name = "Getting started"

[[sections]]
section = 2
id = 102
name = "Staff notes"
user_visible = false

[[sections]]
section = 3
id = 103
"#,
    )
    .unwrap();
}

#[test]
fn renders_navigation_for_course_directory() {
    let temp = tempdir().unwrap();
    write_course(temp.path());

    let config = Config::load(temp.path(), false).unwrap();
    let format = Rc::new(MultitopicFormat::load(&temp.path().join("course.toml")).unwrap());
    let renderer =
        TemplateRenderer::with_template_dir(&temp.path().join("templates"), config.arrows.clone())
            .unwrap();
    let links = CourseLinks::new(config.base_url.clone());

    let mut navigation = SectionNavigation::new(format, 1u32).unwrap();
    let html = renderer.render(&mut navigation, &links).unwrap();

    assert!(html.contains("◄ General"));
    assert!(html.contains("Topic 3 ►"));
    assert!(!html.contains("Staff notes"));
}

#[test]
fn export_skips_hidden_section() {
    let temp = tempdir().unwrap();
    write_course(temp.path());

    let config = Config::load(temp.path(), false).unwrap();
    let format = Rc::new(MultitopicFormat::load(&temp.path().join("course.toml")).unwrap());
    let renderer = TemplateRenderer::new(config.arrows.clone()).unwrap();
    let links = CourseLinks::new(config.base_url);

    let mut navigation = SectionNavigation::new(format, PageId(103)).unwrap();
    let data = navigation.export_for_template(&renderer, &links).unwrap();

    assert_eq!(data.currentsection, 3);
    assert!(data.hasprevious);
    assert_eq!(data.previousname.as_deref(), Some("Getting started"));
    assert_eq!(
        data.previousurl,
        "https://lms.example.org/course/view.php?id=42&sectionid=101"
    );
    assert!(!data.hasnext);
    assert_eq!(data.nexturl, "");

    let again = navigation.export_for_template(&renderer, &links).unwrap();
    assert!(Rc::ptr_eq(&data, &again));
}

#[test]
fn unknown_section_is_rejected() {
    let temp = tempdir().unwrap();
    write_course(temp.path());

    let format = Rc::new(MultitopicFormat::load(&temp.path().join("course.toml")).unwrap());

    assert!(matches!(
        SectionNavigation::new(format, 8u32),
        Err(Error::SectionNotFound(_))
    ));
}
