// SPDX-License-Identifier: MPL-2.0
//! Dashboard tab: welcome banner, headline figures, recent activity and
//! warehouse utilization. The page is read-only.

use crate::domain::dashboard::{
    sample_activity, sample_stats, sample_warehouses, Activity, ActivityKind, StatCard, Trend,
    WarehouseUtilization,
};
use crate::domain::session::UserProfile;
use crate::i18n::fluent::I18n;
use crate::ui::components::badge::Tone;
use crate::ui::components::card::{section, stat_tile};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{progress_bar, text, Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// Sample figures owned by the dashboard.
#[derive(Debug, Clone)]
pub struct State {
    stats: Vec<StatCard>,
    activity: Vec<Activity>,
    warehouses: Vec<WarehouseUtilization>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            stats: sample_stats(),
            activity: sample_activity(),
            warehouses: sample_warehouses(),
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub user: &'a UserProfile,
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let welcome = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(
                text(i18n.tr_with_args("dashboard-welcome", &[("name", ctx.user.name.as_str())]))
                    .size(typography::TITLE_LG),
            )
            .push(
                text(i18n.tr_with_args(
                    "dashboard-role-at-company",
                    &[
                        ("role", ctx.user.role.as_str()),
                        ("company", ctx.user.company.as_str()),
                    ],
                ))
                .size(typography::BODY_LG),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::brand_panel);

    let stats = ctx.state.stats.iter().fold(
        Row::new().spacing(spacing::LG),
        |row, stat| row.push(Container::new(stat_card(i18n, stat)).width(Length::FillPortion(1))),
    );

    let activity = ctx.state.activity.iter().fold(
        Column::new().spacing(spacing::MD),
        |column, entry| column.push(activity_row(entry)),
    );

    let warehouses = ctx.state.warehouses.iter().fold(
        Column::new().spacing(spacing::MD),
        |column, warehouse| column.push(utilization_row(warehouse)),
    );

    let panels = Row::new()
        .spacing(spacing::LG)
        .push(section(i18n.tr("dashboard-recent-activity"), None, activity))
        .push(section(i18n.tr("dashboard-inventory-status"), None, warehouses));

    Column::new()
        .spacing(spacing::LG)
        .push(welcome)
        .push(stats)
        .push(panels)
        .into()
}

fn stat_card<'a, Message: 'a>(i18n: &I18n, stat: &StatCard) -> Element<'a, Message> {
    let footnote = i18n.tr_with_args("dashboard-change-from-last-month", &[("change", stat.change.as_str())]);
    let tone = match stat.trend {
        Trend::Up => Tone::Success,
        Trend::Down => Tone::Danger,
    };
    stat_tile(
        i18n.tr(stat.title_key),
        stat.value.clone(),
        Some((footnote, tone)),
        Some(stat_glyph(stat.title_key)),
    )
}

fn stat_glyph<'a>(title_key: &str) -> Text<'a> {
    match title_key {
        "dashboard-stat-total-inventory" => icons::package(),
        "dashboard-stat-pending-orders" => icons::file(),
        "dashboard-stat-in-transit" => icons::truck(),
        _ => icons::warning(),
    }
}

fn activity_row<'a, Message: 'a>(entry: &Activity) -> Element<'a, Message> {
    let tone = match entry.kind {
        ActivityKind::Success => Tone::Success,
        ActivityKind::Warning => Tone::Warning,
        ActivityKind::Info => Tone::Info,
    };
    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            icons::sized(icons::dot(), sizing::ICON_SM / 2.0)
                .style(styles::text::colored(tone.color())),
        )
        .push(text(entry.message.clone()).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(
            text(entry.time.clone())
                .size(typography::BODY_SM)
                .style(styles::text::muted),
        )
        .into()
}

fn utilization_row<'a, Message: 'a>(warehouse: &WarehouseUtilization) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(
            Row::new()
                .push(text(warehouse.name.clone()).size(typography::BODY))
                .push(Space::new().width(Length::Fill))
                .push(text(format!("{}%", warehouse.percent)).size(typography::BODY)),
        )
        .push(progress_bar(0.0..=1.0, warehouse.ratio()).girth(sizing::PROGRESS_HEIGHT))
        .into()
}
