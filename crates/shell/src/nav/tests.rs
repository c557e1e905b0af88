use atrium_primitives::{ApplicationDescriptor, View};
use atrium_registry::{AppMeta, LoadError, Module, RegistryBuilder};
use pretty_assertions::assert_eq;

use super::*;

fn item(id: &str, label: &str, app: ApplicationDescriptor) -> NavItem {
	NavItem {
		id: id.to_string(),
		label: label.to_string(),
		app,
	}
}

fn deals_group() -> AppGroup {
	AppGroup {
		id: "deals".to_string(),
		title: "Deals".to_string(),
		sections: vec![
			NavSection {
				title: "Pipeline".to_string(),
				items: vec![
					item("overview", "Overview", ApplicationDescriptor::with_id("dealmaking")),
					item(
						"board",
						"Board",
						ApplicationDescriptor::with_component_path("deals/Dashboard").with_sidebar_route("/deals/custom"),
					),
				],
			},
			NavSection {
				title: "Admin".to_string(),
				items: vec![item("settings", "Settings", ApplicationDescriptor::with_id("settings"))],
			},
		],
	}
}

#[test]
fn default_handler_opens_the_item_descriptor() {
	let router = MenuRouter::for_group(&deals_group()).unwrap();

	let opened = router.click("overview").unwrap();
	assert_eq!(opened.id.as_deref(), Some("dealmaking"));
	assert_eq!(opened.sidebar_route.as_deref(), Some("/deals/overview"));

	let board = router.click("board").unwrap();
	assert_eq!(board.sidebar_route.as_deref(), Some("/deals/custom"), "explicit route is kept");
}

#[test]
fn clicks_only_route_within_their_own_tree() {
	let deals = MenuRouter::for_group(&deals_group()).unwrap();
	let other = MenuRouter::for_group(&AppGroup {
		id: "engineering".to_string(),
		title: "Engineering".to_string(),
		sections: vec![NavSection {
			title: "Tools".to_string(),
			items: vec![item("overview", "Overview", ApplicationDescriptor::with_id("engineering"))],
		}],
	})
	.unwrap();

	assert_eq!(deals.click("overview").unwrap().id.as_deref(), Some("dealmaking"));
	assert_eq!(other.click("overview").unwrap().id.as_deref(), Some("engineering"));
	assert!(other.click("board").is_none());
}

#[test]
fn custom_handler_replaces_the_default() {
	let mut router = MenuRouter::for_group(&deals_group()).unwrap();
	router
		.on("settings", |item| Some(ApplicationDescriptor::with_id("settings").with_context("from", item.label.as_str())))
		.unwrap();
	router.on("board", |_| None).unwrap();

	let opened = router.click("settings").unwrap();
	assert_eq!(opened.context_str("from"), Some("Settings"));
	assert_eq!(opened.sidebar_route, None);
	assert!(router.click("board").is_none());
}

#[test]
fn handler_for_unknown_item_is_rejected() {
	let mut router = MenuRouter::for_group(&deals_group()).unwrap();
	let err = router.on("nowhere", |_| None).unwrap_err();
	assert_eq!(
		err,
		NavError::UnknownItem {
			group: "deals".into(),
			item: "nowhere".into(),
		}
	);
	assert!(router.click("nowhere").is_none());
}

#[test]
fn duplicate_and_blank_item_ids_are_rejected() {
	let mut group = deals_group();
	group.sections[1].items.push(item("overview", "Again", ApplicationDescriptor::default()));
	assert_eq!(
		MenuRouter::for_group(&group).unwrap_err(),
		NavError::DuplicateItem {
			group: "deals".into(),
			item: "overview".into(),
		}
	);

	let mut group = deals_group();
	group.sections[0].items[0].id = "  ".to_string();
	assert_eq!(MenuRouter::for_group(&group).unwrap_err(), NavError::EmptyItemId { group: "deals".into() });
}

#[test]
fn items_without_an_application_key_are_rejected() {
	let mut group = deals_group();
	group.sections[1].items.push(item("blank", "Blank", ApplicationDescriptor::with_id(" ").with_sidebar_route("/deals")));
	assert_eq!(
		MenuRouter::for_group(&group).unwrap_err(),
		NavError::MissingApp {
			group: "deals".into(),
			item: "blank".into(),
		}
	);
}

#[test]
fn menu_entries_reject_missing_or_misspelled_fields() {
	let missing_app = toml::from_str::<NavItem>("id = \"hogwarts\"\nlabel = \"Hogwarts\"\n");
	assert!(missing_app.is_err());

	let misspelled = toml::from_str::<NavItem>("id = \"typo\"\nlabel = \"Typo\"\nap = { id = \"hogwartslearning\" }\n");
	assert!(misspelled.is_err());

	let section = toml::from_str::<NavSection>("title = \"Courses\"\nitem = []\n");
	assert!(section.is_err());
}

#[test]
fn view_lists_sections_in_order() {
	let router = MenuRouter::for_group(&deals_group()).unwrap();
	assert_eq!(
		router.view(),
		View::Menu {
			title: "Deals".to_string(),
			sections: vec![
				(
					"Pipeline".to_string(),
					vec![
						("overview".to_string(), "Overview".to_string()),
						("board".to_string(), "Board".to_string()),
					],
				),
				("Admin".to_string(), vec![("settings".to_string(), "Settings".to_string())]),
			],
		}
	);
}

#[test]
fn groups_parse_from_toml() {
	let group: AppGroup = toml::from_str(
		r#"
id = "learning"
title = "Learning"

[[sections]]
title = "Courses"

[[sections.items]]
id = "hogwarts"
label = "Hogwarts"
app = { id = "hogwartslearning", sidebarroute = "/learning/hogwarts", cohort = "2024" }
"#,
	)
	.unwrap();

	let router = MenuRouter::for_group(&group).unwrap();
	let opened = router.click("hogwarts").unwrap();
	assert_eq!(opened.id.as_deref(), Some("hogwartslearning"));
	assert_eq!(opened.sidebar_route.as_deref(), Some("/learning/hogwarts"));
	assert_eq!(opened.context_str("cohort"), Some("2024"));
}

#[test]
fn items_serialize_with_camel_case_descriptors() {
	let value = serde_json::to_value(item(
		"board",
		"Board",
		ApplicationDescriptor::with_component_path("deals/Dashboard"),
	))
	.unwrap();
	assert_eq!(value["app"]["componentPath"], "deals/Dashboard");
	assert_eq!(value["label"], "Board");
}

fn noop() -> impl Fn() -> std::future::Ready<Result<Module, LoadError>> + Send + Sync + 'static {
	|| std::future::ready(Err(LoadError::fetch("unused")))
}

#[test]
fn registry_navigation_groups_by_application_group() {
	let mut builder = RegistryBuilder::new();
	builder.register("speakeasy", AppMeta::runtime("Speakeasy", "hospitality"), noop()).unwrap();
	builder.register("dealmaking", AppMeta::runtime("Deal Making", "deals"), noop()).unwrap();
	builder.register("bar", AppMeta::runtime("Bar", "hospitality"), noop()).unwrap();
	let registry = builder.build();

	let groups = navigation_from_registry(&registry);
	let ids: Vec<_> = groups.iter().map(|g| g.id.as_str()).collect();
	assert_eq!(ids, vec!["deals", "hospitality"]);
	assert_eq!(groups[1].title, "Hospitality");

	let items: Vec<_> = groups[1].sections[0].items.iter().map(|i| (i.id.as_str(), i.label.as_str())).collect();
	assert_eq!(items, vec![("bar", "Bar"), ("speakeasy", "Speakeasy")]);

	let router = MenuRouter::for_group(&groups[0]).unwrap();
	let opened = router.click("dealmaking").unwrap();
	assert_eq!(opened.id.as_deref(), Some("dealmaking"));
	assert_eq!(opened.sidebar_route.as_deref(), Some("/deals/dealmaking"));
}
