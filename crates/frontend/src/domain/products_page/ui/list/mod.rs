use crate::domain::products_page::api;
use crate::domain::products_page::ui::details::ProductsPageDetails;
use crate::shared::components::active_badge::ActiveBadge;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::list_state::{self, ListUiState};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;
use contracts::domain::common::AggregateRoot;
use contracts::domain::products_page::aggregate::ProductsPage;
use leptos::prelude::*;
use std::collections::HashSet;
use std::rc::Rc;

const STORAGE_KEY: &str = "products_page_list_state_v1";

#[derive(Clone, Debug)]
pub struct ProductsPageRow {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub is_active: bool,
    pub language_count: usize,
    pub updated_at: String,
}

impl From<ProductsPage> for ProductsPageRow {
    fn from(p: ProductsPage) -> Self {
        Self {
            id: p.to_string_id(),
            title: p.title,
            slug: p.slug,
            is_active: p.base.is_active,
            language_count: p.localizations.len(),
            updated_at: format_timestamp(p.base.metadata.updated_at),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductsPageList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<ProductsPageRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());
    let state: RwSignal<ListUiState> = list_state::create_state(STORAGE_KEY);
    let filter_expanded = RwSignal::new(false);
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            let query = state.get_untracked().to_query();
            match api::list(&query).await {
                Ok(page) => {
                    let total_pages = page.total_pages();
                    state.update(|st| {
                        st.total_count = page.total_count;
                        st.total_pages = total_pages;
                        st.is_loaded = true;
                    });
                    let rows: Vec<ProductsPageRow> =
                        page.items.into_iter().map(Into::into).collect();
                    set_items.set(rows);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load products pages: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    let open_details_modal = move |id: Option<String>| {
        modal_stack.clear();
        modal_stack.push_with_frame(
            Some("max-width: min(1100px, 95vw); width: min(1100px, 95vw);".to_string()),
            Some("products-page-details-modal".to_string()),
            move |handle| {
                let on_saved = Rc::new({
                    let handle = handle.clone();
                    move |_| {
                        handle.close();
                        toasts.success("Products page saved");
                        fetch();
                    }
                });
                let on_cancel = Rc::new({
                    let handle = handle.clone();
                    move |_| handle.close()
                });

                view! {
                    <ProductsPageDetails
                        id=id.clone()
                        on_saved=on_saved
                        on_cancel=on_cancel
                    />
                }
                .into_any()
            },
        );
    };

    let handle_create_new = move || open_details_modal(None);
    let handle_edit = move |id: String| open_details_modal(Some(id));

    let toggle_select = move |id: String, checked: bool| {
        set_selected.update(|s| {
            if checked {
                s.insert(id.clone());
            } else {
                s.remove(&id);
            }
        });
    };

    let clear_selection = move || set_selected.set(HashSet::new());

    let toggle_active = move |id: String| {
        wasm_bindgen_futures::spawn_local(async move {
            match api::toggle_active(&id).await {
                Ok(_) => {
                    toasts.success("Activation toggled");
                    fetch();
                }
                Err(e) => {
                    log::error!("Failed to toggle products page {}: {}", id, e);
                    toasts.error(format!("Toggle failed: {}", e));
                }
            }
        });
    };

    let delete_selected = move || {
        let ids: Vec<String> = selected.get().into_iter().collect();
        if ids.is_empty() {
            return;
        }

        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!("Delete selected items? Count: {}", ids.len()))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            let mut failed = 0usize;
            for id in ids {
                if api::delete(&id).await.is_err() {
                    failed += 1;
                }
            }
            if failed == 0 {
                toasts.success("Selection deleted");
            } else {
                toasts.error(format!("{} item(s) could not be deleted", failed));
            }
            fetch();
        });
        clear_selection();
    };

    let on_page_change = Callback::new(move |page: usize| {
        state.update(|st| st.page = page);
        list_state::persist_state(STORAGE_KEY, state);
        fetch();
    });

    let on_page_size_change = Callback::new(move |size: usize| {
        state.update(|st| {
            st.page_size = size;
            st.page = 0;
        });
        list_state::persist_state(STORAGE_KEY, state);
        fetch();
    });

    fetch();

    view! {
        <div class="page">
            <PageHeader title=ProductsPage::list_name().to_string()>
                <button class="button button--primary" on:click=move |_| handle_create_new()>
                    {icon("plus")}
                    "New page"
                </button>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
                <button
                    class="button button--secondary"
                    on:click=move |_| delete_selected()
                    disabled=move || selected.get().is_empty()
                >
                    {icon("delete")}
                    {move || format!("Delete ({})", selected.get().len())}
                </button>
            </PageHeader>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <FilterPanel
                is_expanded=filter_expanded
                active_filters_count=Signal::derive(move || state.get().active_filter_count())
                pagination_controls=move || view! {
                    <PaginationControls
                        current_page=Signal::derive(move || state.get().page)
                        total_pages=Signal::derive(move || state.get().total_pages)
                        total_count=Signal::derive(move || state.get().total_count)
                        page_size=Signal::derive(move || state.get().page_size)
                        on_page_change=on_page_change
                        on_page_size_change=on_page_size_change
                    />
                }.into_any()
                filter_content=move || view! {
                    <div class="filter-fields">
                        <div class="form-group">
                            <label for="products-page-search">"Search"</label>
                            <input
                                type="text"
                                id="products-page-search"
                                placeholder="Title or slug"
                                prop:value=move || state.get().search
                                on:input=move |ev| {
                                    state.update(|st| {
                                        st.search = event_target_value(&ev);
                                        st.page = 0;
                                    });
                                    list_state::persist_state(STORAGE_KEY, state);
                                    fetch();
                                }
                            />
                        </div>
                        <label class="checkbox-field">
                            <input
                                type="checkbox"
                                prop:checked=move || state.get().active_only
                                on:change=move |ev| {
                                    state.update(|st| {
                                        st.active_only = event_target_checked(&ev);
                                        st.page = 0;
                                    });
                                    list_state::persist_state(STORAGE_KEY, state);
                                    fetch();
                                }
                            />
                            "Active only"
                        </label>
                    </div>
                }.into_any()
            />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--checkbox">
                                <input
                                    type="checkbox"
                                    class="table__checkbox"
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        let current_items = items.get();
                                        if checked {
                                            set_selected.update(|s| {
                                                for item in current_items.iter() {
                                                    s.insert(item.id.clone());
                                                }
                                            });
                                        } else {
                                            set_selected.set(HashSet::new());
                                        }
                                    }
                                />
                            </th>
                            <th class="table__header-cell">"Title"</th>
                            <th class="table__header-cell">"Slug"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Languages"</th>
                            <th class="table__header-cell">"Updated"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let id = row.id.clone();
                            let id_for_click = id.clone();
                            let id_for_checkbox = id.clone();
                            let id_for_toggle_select = id.clone();
                            let id_for_toggle_active = id.clone();
                            let is_active = row.is_active;
                            let is_selected = selected.get().contains(&id);
                            view! {
                                <tr
                                    class="table__row"
                                    class:table__row--selected=is_selected
                                    on:click=move |_| handle_edit(id_for_click.clone())
                                >
                                    <TableCheckbox
                                        checked=Signal::derive(move || selected.get().contains(&id_for_checkbox))
                                        on_change=Callback::new(move |checked| toggle_select(id_for_toggle_select.clone(), checked))
                                    />
                                    <td class="table__cell">{row.title}</td>
                                    <td class="table__cell">{row.slug}</td>
                                    <td class="table__cell">
                                        <ActiveBadge
                                            is_active=Signal::derive(move || is_active)
                                            on_toggle=Callback::new(move |_| toggle_active(id_for_toggle_active.clone()))
                                        />
                                    </td>
                                    <td class="table__cell">{row.language_count}</td>
                                    <td class="table__cell">{row.updated_at}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
