// SPDX-License-Identifier: MPL-2.0
use std::fs;
use tempfile::tempdir;
use vitrine::app::{Showcase, ShowcaseContext, ShowcaseEvent};
use vitrine::application::port::CatalogView;
use vitrine::application::query::{Direction, NavigationControls};
use vitrine::catalog_loader::CatalogFile;
use vitrine::config::{self, CarouselConfig, Config};
use vitrine::domain::catalog::{CatalogItem, Category};
use vitrine::error::Error;
use vitrine::i18n::I18n;
use std::time::Duration;
use vitrine::ui::effects::{Counter, Effect, EffectFrame, Typewriter, TypewriterTiming};
use vitrine::ui::state::{configured_anchor_scroll_target, HeaderState, RevealTracker};
use vitrine::ui::text_view::TextView;

#[derive(Debug, Default)]
struct LastRender {
    items: Vec<String>,
    selected: String,
    controls: NavigationControls,
}

impl CatalogView for LastRender {
    fn render_tabs(&mut self, _catalog: &str, _categories: &[Category], selected: &Category) {
        self.selected = selected.to_string();
    }

    fn render_items(&mut self, _catalog: &str, items: &[&CatalogItem]) {
        self.items = items.iter().map(|item| item.id.clone()).collect();
    }

    fn render_navigation(&mut self, _catalog: &str, controls: NavigationControls) {
        self.controls = controls;
    }
}

fn demo_catalog() -> CatalogFile {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/catalog.toml");
    CatalogFile::load(path.as_ref()).expect("demo catalog loads")
}

#[test]
fn demo_catalog_drives_showcase() {
    let mut showcase = Showcase::new(ShowcaseContext::default(), LastRender::default());
    for event in demo_catalog().into_events() {
        showcase.handle(event).expect("catalog registers");
    }

    showcase
        .handle(ShowcaseEvent::TabSelected {
            catalog: "trainings".into(),
            category: "security".into(),
        })
        .unwrap();

    let view = showcase.view();
    assert_eq!(
        view.items,
        vec!["network-security", "ethical-hacking", "digital-forensics"]
    );
    assert_eq!(view.selected, "security");
    // 3 * 320 + 2 * 16 = 992 in a 936px viewport.
    assert_eq!(view.controls.max_offset, 56.0);

    // The shop keeps its own selection.
    assert!(showcase
        .filters()
        .current_selection("shop")
        .unwrap()
        .selected_category
        .is_all());
}

#[test]
fn carousel_scenario_from_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let settings = dir.path().join("settings.toml");
    let config = Config {
        carousel: CarouselConfig {
            gap: Some(16.0),
            container_width: Some(936.0),
        },
        ..Config::default()
    };
    config::save_to_path(&config, &settings).expect("Failed to write config file");
    let loaded = config::load_from_path(&settings).expect("Failed to load config");

    let mut showcase = Showcase::new(ShowcaseContext::from_config(&loaded), LastRender::default());
    showcase
        .handle(ShowcaseEvent::CatalogUpdated {
            catalog: "trainings".into(),
            items: (0..5)
                .map(|i| CatalogItem::new(format!("course-{i}"), "web", 320.0))
                .collect(),
            categories: vec!["web".into()],
        })
        .unwrap();

    let mut offsets = Vec::new();
    for _ in 0..4 {
        showcase
            .handle(ShowcaseEvent::Arrow {
                catalog: "trainings".into(),
                direction: Direction::Forward,
            })
            .unwrap();
        offsets.push(showcase.view().controls.offset);
    }
    assert_eq!(offsets, vec![336.0, 672.0, 728.0, 728.0]);
    assert!(!showcase.view().controls.can_scroll_forward);
    assert!(showcase.view().controls.can_scroll_backward);
}

#[test]
fn reregistering_catalog_resets_missing_selection() {
    let mut showcase = Showcase::new(ShowcaseContext::default(), LastRender::default());
    let register = |categories: Vec<Category>| ShowcaseEvent::CatalogUpdated {
        catalog: "shop".into(),
        items: vec![
            CatalogItem::new("laptop", "hardware", 280.0),
            CatalogItem::new("antivirus", "software", 280.0),
        ],
        categories,
    };

    showcase
        .handle(register(vec!["hardware".into(), "software".into()]))
        .unwrap();
    showcase
        .handle(ShowcaseEvent::TabSelected {
            catalog: "shop".into(),
            category: "software".into(),
        })
        .unwrap();
    assert_eq!(showcase.view().items, vec!["antivirus"]);

    showcase.handle(register(vec!["hardware".into()])).unwrap();
    assert_eq!(showcase.view().selected, "all");
    assert_eq!(showcase.view().items, vec!["laptop", "antivirus"]);
}

#[test]
fn localized_text_view_reports_errors_in_french() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let settings = dir.path().join("settings.toml");
    fs::write(&settings, "language = \"fr\"\n").expect("Failed to write config");
    let config = config::load_from_path(&settings).expect("Failed to load config");
    let i18n = I18n::new(None, &config);
    assert_eq!(i18n.current_locale().to_string(), "fr");

    let mut showcase = Showcase::new(ShowcaseContext::default(), TextView::new(Vec::new(), &i18n));
    for event in demo_catalog().into_events() {
        showcase.handle(event).unwrap();
    }
    let err = showcase
        .handle(ShowcaseEvent::TabSelected {
            catalog: "trainings".into(),
            category: "cuisine".into(),
        })
        .unwrap_err();
    assert!(matches!(err, Error::UnknownCategory { .. }));
    assert_eq!(
        i18n.tr_error(&err),
        "La catégorie « cuisine » n'existe pas."
    );

    let output = String::from_utf8(showcase.into_view().into_inner()).unwrap();
    assert!(output.starts_with("Formations: [Tous] web security office\n"));
    assert!(output.contains("Boutique (4): laptop-pro, antivirus-suite, wireless-mouse, office-licence"));
}

#[test]
fn page_and_effect_settings_take_effect() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let settings = dir.path().join("settings.toml");
    fs::write(
        &settings,
        "[page]\nheader_offset = 120.0\nheader_scroll_threshold = 300.0\nreveal_ratio = 2.0\n\n\
         [effects]\ntype_interval_ms = 40\ncounter_duration_ms = 400\n",
    )
    .expect("Failed to write config");
    let config = config::load_from_path(&settings).expect("Failed to load config");

    assert_eq!(
        configured_anchor_scroll_target("#services", 1000.0, &config),
        Some(880.0)
    );

    let mut header = HeaderState::from_config(&config);
    assert!(!header.on_scroll(200.0));
    assert!(header.on_scroll(350.0));

    let mut reveal = RevealTracker::from_config(&config);
    assert_eq!(reveal.on_scroll(800.0, [("about", 450.0), ("stats", 350.0)]), vec!["stats"]);

    let mut counter = Counter::from_config(20, &config);
    assert_eq!(counter.advance(Duration::from_millis(200)), EffectFrame::Count(10));

    let mut typewriter = Typewriter::new(["Formations"], TypewriterTiming::from_config(&config));
    assert_eq!(
        typewriter.advance(Duration::from_millis(80)),
        EffectFrame::Text("Fo".to_string())
    );
}
