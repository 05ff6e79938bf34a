use super::data;
use crate::shared::components::charts::{BarChart, LineChart};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

/// Statistics page: stat-card row plus charts over the sample series.
#[component]
#[allow(non_snake_case)]
pub fn OverviewDashboard() -> impl IntoView {
    let records_change = data::records_change_percent();

    view! {
        <div class="page">
            <PageHeader
                title="Statistics".to_string()
                subtitle="Catalog activity at a glance".to_string()
            >
                <></>
            </PageHeader>

            <div class="stat-card-grid">
                <StatCard
                    label="Categories".to_string()
                    icon_name="folder-closed".to_string()
                    value=Signal::derive(|| Some(data::TOTAL_CATEGORIES))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                    change_percent=Signal::derive(|| None::<f64>)
                />
                <StatCard
                    label="Employees".to_string()
                    icon_name="users".to_string()
                    value=Signal::derive(|| Some(data::TOTAL_EMPLOYEES))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                    change_percent=Signal::derive(|| None::<f64>)
                />
                <StatCard
                    label="Content pages".to_string()
                    icon_name="file-text".to_string()
                    value=Signal::derive(|| Some(data::TOTAL_CONTENT_PAGES))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                    change_percent=Signal::derive(move || records_change)
                />
                <StatCard
                    label="Active share".to_string()
                    icon_name="activity".to_string()
                    value=Signal::derive(|| Some(data::ACTIVE_SHARE_PERCENT))
                    format=ValueFormat::Percent { decimals: 1 }
                    status=Signal::derive(|| IndicatorStatus::Good)
                    change_percent=Signal::derive(|| None::<f64>)
                    subtitle=Signal::derive(|| Some("of all catalog records".to_string()))
                />
            </div>

            <div class="chart-grid">
                <BarChart
                    title="Records created per month".to_string()
                    data=data::series(&data::RECORDS_PER_MONTH)
                />
                <LineChart
                    title="Content page views, thousands".to_string()
                    data=data::series(&data::PAGE_VIEWS_PER_MONTH)
                />
            </div>
        </div>
    }
}
