//! Widget table assembly: state decoding, data windowing, headers, pager and row actions.

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::page_range::{next_page, prev_page, PageRange};
use crate::models::pagination::{PaginationInfo, WindowSpec};
use crate::models::query_params::{Link, LinkRenderer, QueryParams};
use crate::models::widget_state::{PaginationState, SortOrder, WidgetKey};
use crate::services::collection::DataSource;

/// Column declaration for a widget table.
#[derive(Debug, Clone)]
pub struct Column {
    pub title: String,
    pub key: String,
    pub sortable: bool,
}

impl Column {
    pub fn sortable(title: &str, key: &str) -> Self {
        Self {
            title: title.to_string(),
            key: key.to_string(),
            sortable: true,
        }
    }

    pub fn plain(title: &str, key: &str) -> Self {
        Self {
            sortable: false,
            ..Self::sortable(title, key)
        }
    }
}

/// Per-row member action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberAction {
    View,
    Edit,
    Delete,
}

/// Target of a member action. Authorization is up to the embedder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionLink {
    pub action: MemberAction,
    pub method: &'static str,
    pub path: String,
}

impl ActionLink {
    pub fn new(action: MemberAction, resource: &str, id: &str) -> Self {
        match action {
            MemberAction::View => Self {
                action,
                method: "GET",
                path: format!("/{resource}/{id}"),
            },
            MemberAction::Edit => Self {
                action,
                method: "GET",
                path: format!("/{resource}/{id}/edit"),
            },
            MemberAction::Delete => Self {
                action,
                method: "DELETE",
                path: format!("/{resource}/{id}"),
            },
        }
    }
}

/// Rendering options for one widget instance.
#[derive(Debug, Clone)]
pub struct WidgetOptions {
    pub per_page: u64,
    pub sortable: bool,
    pub actions: Vec<MemberAction>,
}

impl WidgetOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            per_page: config.widget_per_page,
            sortable: true,
            actions: Vec::new(),
        }
    }

    pub fn with_per_page(mut self, per_page: u64, config: &AppConfig) -> Self {
        self.per_page = config.clamp_per_page(per_page);
        self
    }

    pub fn with_actions(mut self, actions: &[MemberAction]) -> Self {
        self.actions = actions.to_vec();
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnHeader {
    pub title: String,
    pub key: String,
    /// Direction when this column is the active sort.
    pub sorted: Option<SortOrder>,
    pub link: Option<Link>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageButton {
    pub page: u64,
    pub current: bool,
    pub link: Option<Link>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Pager {
    pub first: Option<Link>,
    pub prev: Option<Link>,
    pub buttons: Vec<PageButton>,
    pub next: Option<Link>,
    pub last: Option<Link>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WidgetRow<T: Serialize> {
    pub record: T,
    pub actions: Vec<ActionLink>,
}

/// Fully assembled widget, ready for a view renderer.
#[derive(Debug, Clone, Serialize)]
pub struct WidgetTable<T: Serialize> {
    pub key: WidgetKey,
    pub element_type: String,
    pub state: PaginationState,
    pub window: WindowSpec,
    pub info: PaginationInfo,
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<WidgetRow<T>>,
    pub pager: Pager,
}

/// Build one widget from the current request parameters.
///
/// The decoded sort key is checked against the sortable columns before the
/// data source sees it. A key outside that set resets the widget to its
/// default state instead of failing the request.
pub fn build_widget<S: DataSource>(
    source: &S,
    params: &QueryParams,
    columns: &[Column],
    options: &WidgetOptions,
    renderer: &impl LinkRenderer,
) -> Result<WidgetTable<S::Item>, AppError> {
    let key = WidgetKey::for_type(source.element_type());
    let state = whitelist_sort(
        PaginationState::decode(params, &key),
        columns,
        source.element_type(),
    );

    let total_count = source.count()?;
    let window = WindowSpec::new(&state, options.per_page);
    let items = source.fetch(&window)?;
    if items.len() as u64 > window.limit {
        return Err(AppError::Internal(format!(
            "{} source returned {} rows for a window of {}",
            source.element_type(),
            items.len(),
            window.limit
        )));
    }
    let info = PaginationInfo::new(&window, state.page, total_count, items.len() as u64);

    tracing::debug!(
        widget = %key,
        sort_key = %state.sort_key,
        order = %state.order,
        page = state.page,
        total_count,
        "Built widget table"
    );

    let headers = build_headers(&state, &key, params, columns, options.sortable, renderer);
    let pager = build_pager(&state, &key, params, info.total_pages, renderer);
    let rows = items
        .into_iter()
        .map(|item| {
            let id = source.item_id(&item);
            WidgetRow {
                actions: options
                    .actions
                    .iter()
                    .map(|action| ActionLink::new(*action, source.resource(), &id))
                    .collect(),
                record: item,
            }
        })
        .collect();

    Ok(WidgetTable {
        element_type: source.element_type().to_string(),
        key,
        state,
        window,
        info,
        columns: headers,
        rows,
        pager,
    })
}

/// The default sort key is always accepted; it is the only key a request
/// without a token can produce.
fn whitelist_sort(
    state: PaginationState,
    columns: &[Column],
    element_type: &str,
) -> PaginationState {
    let default = PaginationState::default();
    let known = state.sort_key == default.sort_key
        || columns
            .iter()
            .any(|c| c.sortable && c.key == state.sort_key);
    if known {
        return state;
    }

    tracing::warn!(
        element_type = %element_type,
        sort_key = %state.sort_key,
        "Unsortable widget sort key, resetting to default state"
    );
    default
}

fn build_headers(
    state: &PaginationState,
    key: &WidgetKey,
    params: &QueryParams,
    columns: &[Column],
    sortable: bool,
    renderer: &impl LinkRenderer,
) -> Vec<ColumnHeader> {
    columns
        .iter()
        .map(|column| {
            let active = sortable && column.sortable;
            ColumnHeader {
                title: column.title.clone(),
                key: column.key.clone(),
                sorted: (active && state.sort_key == column.key).then_some(state.order),
                link: active.then(|| {
                    renderer.render(
                        &column.title,
                        params.with_token(key, state.toggle_sort(&column.key)),
                    )
                }),
            }
        })
        .collect()
}

fn build_pager(
    state: &PaginationState,
    key: &WidgetKey,
    params: &QueryParams,
    total_pages: u64,
    renderer: &impl LinkRenderer,
) -> Pager {
    let range = PageRange::new(state.page, total_pages);
    let page_link = |label: &str, page: u64| {
        renderer.render(label, params.with_token(key, state.with_page(page)))
    };

    let buttons = range
        .buttons
        .iter()
        .map(|&page| {
            let current = page == range.current;
            PageButton {
                page,
                current,
                link: (!current).then(|| page_link(&page.to_string(), page)),
            }
        })
        .collect();

    let (first, prev) = if range.show_first_prev {
        (
            Some(page_link("First", 1)),
            prev_page(state.page).map(|page| page_link("Prev", page)),
        )
    } else {
        (None, None)
    };
    let (next, last) = if range.show_next_last {
        (
            next_page(state.page, total_pages).map(|page| page_link("Next", page)),
            Some(page_link("Last", total_pages)),
        )
    } else {
        (None, None)
    };

    Pager {
        first,
        prev,
        buttons,
        next,
        last,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::models::course::Course;
    use crate::models::query_params::QueryLinkRenderer;
    use crate::services::collection::MemoryCollection;

    fn source(n: u64) -> MemoryCollection<Course> {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        MemoryCollection::new(
            (1..=n)
                .map(|i| Course {
                    id: Uuid::from_u128(i as u128),
                    title: format!("Course {i:03}"),
                    credits: 3,
                    created_at: base + Duration::hours(i as i64),
                })
                .collect(),
        )
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::sortable("Title", "title"),
            Column::sortable("Created", "created_at"),
            Column::plain("Credits", "credits"),
        ]
    }

    fn options() -> WidgetOptions {
        WidgetOptions::from_config(&AppConfig::default())
    }

    fn build(n: u64, params: &QueryParams) -> Result<WidgetTable<Course>, AppError> {
        build_widget(&source(n), params, &columns(), &options(), &QueryLinkRenderer)
    }

    #[test]
    fn default_state_shows_newest_first() {
        let widget = build(25, &QueryParams::default()).unwrap();
        assert_eq!(widget.key.as_str(), "course-w");
        assert_eq!(widget.state, PaginationState::default());
        assert_eq!(widget.rows.len(), 10);
        assert_eq!(widget.rows[0].record.title, "Course 025");
        assert_eq!(widget.info.total_pages, 3);
        assert_eq!(widget.info.start_index, 1);
        assert_eq!(widget.info.end_index, 10);
    }

    #[test]
    fn pager_on_first_page() {
        let widget = build(25, &QueryParams::default()).unwrap();
        let pager = widget.pager;
        assert!(pager.first.is_none());
        assert!(pager.prev.is_none());
        assert_eq!(
            pager.buttons.iter().map(|b| b.page).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert!(pager.buttons[0].current);
        assert!(pager.buttons[0].link.is_none());
        assert_eq!(
            pager.buttons[1].link.as_ref().unwrap().params.get("course-w"),
            Some("created_at-desc-2")
        );
        assert_eq!(
            pager.next.unwrap().params.get("course-w"),
            Some("created_at-desc-2")
        );
        assert_eq!(
            pager.last.unwrap().params.get("course-w"),
            Some("created_at-desc-3")
        );
    }

    #[test]
    fn pager_on_last_page() {
        let params = QueryParams::from_pairs([("course-w", "title-asc-3")]);
        let widget = build(25, &params).unwrap();
        assert_eq!(widget.rows.len(), 5);
        assert!(widget.pager.next.is_none());
        assert!(widget.pager.last.is_none());
        assert_eq!(
            widget.pager.first.unwrap().params.get("course-w"),
            Some("title-asc-1")
        );
        assert_eq!(
            widget.pager.prev.unwrap().params.get("course-w"),
            Some("title-asc-2")
        );
    }

    #[test]
    fn sortable_header_toggles_and_resets_page() {
        let params = QueryParams::from_pairs([("course-w", "title-desc-2")]);
        let widget = build(25, &params).unwrap();

        let title = &widget.columns[0];
        assert_eq!(title.sorted, Some(SortOrder::Desc));
        assert_eq!(
            title.link.as_ref().unwrap().params.get("course-w"),
            Some("title-asc-1")
        );

        let created = &widget.columns[1];
        assert_eq!(created.sorted, None);
        assert_eq!(
            created.link.as_ref().unwrap().params.get("course-w"),
            Some("created_at-asc-1")
        );

        assert!(widget.columns[2].link.is_none());
    }

    #[test]
    fn widget_level_sortable_off_disables_links() {
        let opts = WidgetOptions {
            sortable: false,
            ..options()
        };
        let widget = build_widget(
            &source(5),
            &QueryParams::default(),
            &columns(),
            &opts,
            &QueryLinkRenderer,
        )
        .unwrap();
        assert!(widget.columns.iter().all(|c| c.link.is_none() && c.sorted.is_none()));
    }

    #[test]
    fn links_preserve_other_parameters() {
        let params = QueryParams::from_pairs([("student-w", "name-asc-4"), ("tab", "x")]);
        let widget = build(25, &params).unwrap();
        let next = widget.pager.next.unwrap();
        assert_eq!(next.params.get("student-w"), Some("name-asc-4"));
        assert_eq!(next.params.get("tab"), Some("x"));
        assert_eq!(next.href, "?course-w=created_at-desc-2&student-w=name-asc-4&tab=x");
    }

    #[test]
    fn page_past_the_end_is_empty_not_an_error() {
        let params = QueryParams::from_pairs([("course-w", "title-asc-9")]);
        let widget = build(25, &params).unwrap();
        assert!(widget.rows.is_empty());
        assert_eq!(widget.info.start_index, 0);
        assert!(widget.pager.next.is_none());
        assert!(widget.pager.first.is_some());
    }

    #[test]
    fn malformed_token_degrades_to_defaults() {
        let params = QueryParams::from_pairs([("course-w", "title-sideways-abc")]);
        let widget = build(25, &params).unwrap();
        assert_eq!(widget.state.sort_key, "title");
        assert_eq!(widget.state.order, SortOrder::Desc);
        assert_eq!(widget.state.page, 1);
    }

    #[test]
    fn unknown_sort_key_resets_to_default_state() {
        let params = QueryParams::from_pairs([("course-w", "credits-asc-2")]);
        let widget = build(25, &params).unwrap();
        assert_eq!(widget.state, PaginationState::default());
        assert_eq!(widget.window.sort_key, "created_at");
        assert_eq!(widget.rows[0].record.title, "Course 025");
        assert_eq!(
            widget.pager.next.unwrap().params.get("course-w"),
            Some("created_at-desc-2")
        );
    }

    /// Ignores the window and hands back every record.
    struct UnboundedSource(MemoryCollection<Course>);

    impl DataSource for UnboundedSource {
        type Item = Course;

        fn element_type(&self) -> &str {
            self.0.element_type()
        }

        fn resource(&self) -> &str {
            self.0.resource()
        }

        fn item_id(&self, item: &Course) -> String {
            self.0.item_id(item)
        }

        fn count(&self) -> Result<u64, AppError> {
            self.0.count()
        }

        fn fetch(&self, window: &WindowSpec) -> Result<Vec<Course>, AppError> {
            let everything = WindowSpec {
                offset: 0,
                limit: u64::MAX,
                ..window.clone()
            };
            self.0.fetch(&everything)
        }
    }

    #[test]
    fn oversized_page_from_source_is_internal_error() {
        let err = build_widget(
            &UnboundedSource(source(25)),
            &QueryParams::default(),
            &columns(),
            &options(),
            &QueryLinkRenderer,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn empty_collection_has_no_buttons() {
        let widget = build(0, &QueryParams::default()).unwrap();
        assert!(widget.rows.is_empty());
        assert_eq!(widget.info.total_pages, 0);
        assert!(widget.pager.buttons.is_empty());
        assert!(widget.pager.first.is_none());
        assert!(widget.pager.last.is_none());
    }

    #[test]
    fn member_actions_per_row() {
        let opts = options().with_actions(&[MemberAction::View, MemberAction::Delete]);
        let widget = build_widget(
            &source(1),
            &QueryParams::default(),
            &columns(),
            &opts,
            &QueryLinkRenderer,
        )
        .unwrap();
        let id = Uuid::from_u128(1);
        assert_eq!(
            widget.rows[0].actions,
            vec![
                ActionLink {
                    action: MemberAction::View,
                    method: "GET",
                    path: format!("/courses/{id}"),
                },
                ActionLink {
                    action: MemberAction::Delete,
                    method: "DELETE",
                    path: format!("/courses/{id}"),
                },
            ]
        );
    }

    #[test]
    fn edit_action_path() {
        let link = ActionLink::new(MemberAction::Edit, "students", "abc");
        assert_eq!(link.path, "/students/abc/edit");
        assert_eq!(link.method, "GET");
    }

    #[test]
    fn per_page_is_clamped() {
        let config = AppConfig::default();
        let opts = WidgetOptions::from_config(&config).with_per_page(1000, &config);
        assert_eq!(opts.per_page, 100);
    }
}
