use crate::hooks::use_master_detail;
use crate::Route;
use chrono::Utc;
use shared::dashboard::DashboardStats;
use shared::dto::common::format_cents;
use shared::{EventDto, FighterDto, PaymentCodeDto, RefreshPolicy, TicketDto};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
struct StatCardProps {
    label: AttrValue,
    value: AttrValue,
    #[prop_or_default]
    detail: Option<AttrValue>,
    to: Route,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <Link<Route> to={props.to.clone()} classes="block bg-white rounded-lg shadow-sm p-5 hover:shadow-md">
            <p class="text-sm text-gray-500">{props.label.clone()}</p>
            <p class="text-2xl font-semibold mt-1">{props.value.clone()}</p>
            if let Some(detail) = &props.detail {
                <p class="text-xs text-gray-500 mt-1">{detail.clone()}</p>
            }
        </Link<Route>>
    }
}

#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let events = use_master_detail::<EventDto>(RefreshPolicy::Refetch);
    let fighters = use_master_detail::<FighterDto>(RefreshPolicy::Refetch);
    let tickets = use_master_detail::<TicketDto>(RefreshPolicy::Refetch);
    let codes = use_master_detail::<PaymentCodeDto>(RefreshPolicy::Refetch);

    let loading = [
        events.view().status.is_busy(),
        fighters.view().status.is_busy(),
        tickets.view().status.is_busy(),
        codes.view().status.is_busy(),
    ]
    .iter()
    .any(|busy| *busy);

    let stats = DashboardStats::summarize(
        &events.view().items,
        &fighters.view().items,
        &tickets.view().items,
        &codes.view().items,
        Utc::now(),
    );

    html! {
        <div class="container mx-auto px-4 py-6">
            <div class="flex items-center justify-between mb-4">
                <h1 class="text-xl font-medium">{"Dashboard"}</h1>
                if loading {
                    <span class="text-sm text-gray-500">{"Updating..."}</span>
                }
            </div>
            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-4">
                <StatCard
                    label="Upcoming events"
                    value={stats.upcoming_events.to_string()}
                    detail={stats.next_event.clone().map(|name| AttrValue::from(format!("Next: {}", name)))}
                    to={Route::AdminEvents}
                />
                <StatCard
                    label="Fighters checked in"
                    value={format!("{} / {}", stats.fighters_checked_in, stats.fighters_total)}
                    detail={AttrValue::from(format!("{}%", DashboardStats::percent(stats.fighters_checked_in, stats.fighters_total)))}
                    to={Route::AdminFighters}
                />
                <StatCard
                    label="Tickets redeemed"
                    value={format!("{} / {}", stats.tickets_redeemed, stats.tickets_total)}
                    detail={AttrValue::from(format!("{}%", DashboardStats::percent(stats.tickets_redeemed, stats.tickets_total)))}
                    to={Route::AdminTickets}
                />
                <StatCard
                    label="Outstanding cash codes"
                    value={format_cents(stats.outstanding_cash_cents)}
                    to={Route::AdminCodes}
                />
            </div>
        </div>
    }
}
