use crate::dashboards::overview::OverviewDashboard;
use crate::domain::category::ui::list::CategoryList;
use crate::domain::currency::ui::list::CurrencyList;
use crate::domain::employee::ui::list::EmployeeList;
use crate::domain::posts_page::ui::list::PostsPageList;
use crate::domain::products_page::ui::list::ProductsPageList;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <Redirect path="/categories" /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/categories" /> } />
                    <Route path=path!("/categories") view=CategoryList />
                    <Route path=path!("/currencies") view=CurrencyList />
                    <Route path=path!("/employees") view=EmployeeList />
                    <Route path=path!("/posts-pages") view=PostsPageList />
                    <Route path=path!("/products-pages") view=ProductsPageList />
                    <Route path=path!("/statistics") view=OverviewDashboard />
                </Routes>
            </Shell>
        </Router>
    }
}
