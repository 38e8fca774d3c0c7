use leptos::*;

use crate::components::export::GithubExportButton;
use crate::components::stat_card::{StatCard, Trend};
use crate::i18n::{use_language, Language};
use crate::models::{MonthlyRevenue, PaymentMethod, Transaction, TransactionStatus};
use crate::utils::{format_inr, group_indian};

struct Text {
    welcome: &'static str,
    subtitle: &'static str,
    tenants: &'static str,
    revenue: &'static str,
    visitors: &'static str,
    sales: &'static str,
    this_month: &'static str,
    last_month: &'static str,
    revenue_trend: &'static str,
    recent_transactions: &'static str,
    github: &'static str,
}

const EN: Text = Text {
    welcome: "Welcome to Mall Magic",
    subtitle: "Here's an overview of your mall performance",
    tenants: "Total Tenants",
    revenue: "Monthly Revenue",
    visitors: "Monthly Visitors",
    sales: "Total Sales",
    this_month: "this month",
    last_month: "vs last month",
    revenue_trend: "Revenue Trend",
    recent_transactions: "Recent Transactions",
    github: "GitHub Integration",
};

const HI: Text = Text {
    welcome: "मॉल मैजिक में आपका स्वागत है",
    subtitle: "यहां आपके मॉल के प्रदर्शन का अवलोकन है",
    tenants: "कुल किरायेदार",
    revenue: "मासिक राजस्व",
    visitors: "मासिक आगंतुक",
    sales: "कुल बिक्री",
    this_month: "इस महीने",
    last_month: "पिछले महीने की तुलना में",
    revenue_trend: "राजस्व रुझान",
    recent_transactions: "हाल के लेन-देन",
    github: "GitHub एकीकरण",
};

fn text(lang: Language) -> &'static Text {
    match lang {
        Language::En => &EN,
        Language::Hi => &HI,
    }
}

const REVENUE: &[MonthlyRevenue] = &[
    MonthlyRevenue { month: "Jan", amount: 2_450_000 },
    MonthlyRevenue { month: "Feb", amount: 2_610_000 },
    MonthlyRevenue { month: "Mar", amount: 2_380_000 },
    MonthlyRevenue { month: "Apr", amount: 2_890_000 },
    MonthlyRevenue { month: "May", amount: 3_120_000 },
    MonthlyRevenue { month: "Jun", amount: 3_245_500 },
];

const RECENT: &[Transaction] = &[
    Transaction { id: "TXN-2024-201", store: "Chennai Silks", amount: 24_500, gst: 3_738, method: PaymentMethod::Upi, date: "2024-06-14", status: TransactionStatus::Completed },
    Transaction { id: "TXN-2024-202", store: "Bombay Electronics", amount: 86_999, gst: 13_271, method: PaymentMethod::Card, date: "2024-06-14", status: TransactionStatus::Completed },
    Transaction { id: "TXN-2024-203", store: "Delhi Sweets", amount: 1_840, gst: 88, method: PaymentMethod::Cash, date: "2024-06-13", status: TransactionStatus::Completed },
    Transaction { id: "TXN-2024-204", store: "Mumbai Fashion", amount: 12_300, gst: 1_877, method: PaymentMethod::Upi, date: "2024-06-13", status: TransactionStatus::Pending },
    Transaction { id: "TXN-2024-205", store: "Bangalore Tech", amount: 45_750, gst: 6_979, method: PaymentMethod::NetBanking, date: "2024-06-12", status: TransactionStatus::Completed },
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    let language = use_language();

    view! {
        <div style="display: flex; flex-direction: column; gap: 1.5rem;">
            {move || {
                let t = text(language.get());
                view! {
                    <div>
                        <h1 style="font-size: 2rem; font-weight: 700; color: var(--text-heading); margin: 0;">{t.welcome}</h1>
                        <p style="color: var(--text-muted); margin: 0.5rem 0 0 0;">{t.subtitle}</p>
                    </div>

                    <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1.5rem;">
                        <StatCard
                            title=t.tenants
                            value=group_indian(124)
                            description=t.last_month
                            trend=Trend { value: 4, positive: true }
                        />
                        <StatCard
                            title=t.revenue
                            value=format_inr(3_245_500)
                            description=t.last_month
                            trend=Trend { value: 12, positive: true }
                        />
                        <StatCard
                            title=t.visitors
                            value=group_indian(142_350)
                            description=t.last_month
                            trend=Trend { value: 2, positive: false }
                        />
                        <StatCard
                            title=t.sales
                            value=format_inr(12_545_000)
                            description=t.this_month
                        />
                    </div>

                    <div style="display: grid; grid-template-columns: 2fr 1fr; gap: 1.5rem; align-items: stretch;">
                        <RevenueChart title=t.revenue_trend/>
                        <RecentTransactions title=t.recent_transactions/>
                    </div>
                }
            }}

            <div style="background: var(--bg-surface); padding: 1.5rem; border-radius: var(--radius-lg); border: 1px solid var(--border-subtle);">
                <h2 style="font-size: 1.25rem; font-weight: 600; color: var(--text-heading); margin: 0 0 1rem 0;">
                    {move || text(language.get()).github}
                </h2>
                <GithubExportButton/>
            </div>
        </div>
    }
}

#[component]
fn RevenueChart(#[prop(into)] title: String) -> impl IntoView {
    // Plot into a 0..100 square and let the viewBox scale; 5% side margins,
    // 80% of the height for the data range.
    let max = REVENUE.iter().map(|r| r.amount).max().unwrap_or(1) as f64;
    let last = REVENUE.len().saturating_sub(1).max(1) as f64;
    let get_x = |i: usize| 5.0 + (i as f64 / last) * 90.0;
    let get_y = |amount: i64| 95.0 - (amount as f64 / max) * 80.0;

    let points: Vec<(f64, f64)> = REVENUE
        .iter()
        .enumerate()
        .map(|(i, r)| (get_x(i), get_y(r.amount)))
        .collect();

    let mut line_d = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        if i == 0 {
            line_d.push_str(&format!("M {x:.2},{y:.2}"));
        } else {
            line_d.push_str(&format!(" L {x:.2},{y:.2}"));
        }
    }
    let fill_d = match (points.first(), points.last()) {
        (Some(first), Some(last)) => {
            format!("{line_d} L {:.2},95 L {:.2},95 Z", last.0, first.0)
        }
        _ => String::new(),
    };

    view! {
        <div style="background: var(--bg-surface); padding: 1.5rem; border-radius: var(--radius-lg); border: 1px solid var(--border-subtle);">
            <h3 style="font-size: 1.1rem; font-weight: 600; color: var(--text-heading); margin: 0 0 1.5rem 0;">{title}</h3>
            <div style="position: relative; width: 100%; height: 260px;">
                <svg width="100%" height="100%" viewBox="0 0 100 100" preserveAspectRatio="none" style="overflow: visible; position: absolute; top: 0; left: 0;">
                    <defs>
                        <linearGradient id="revenueGradient" x1="0" x2="0" y1="0" y2="1">
                            <stop offset="0%" stop-color="var(--brand-primary)" stop-opacity="0.15"/>
                            <stop offset="100%" stop-color="var(--brand-primary)" stop-opacity="0"/>
                        </linearGradient>
                    </defs>

                    {(0..=4).map(|i| {
                        let y = 15.0 + (i as f64 * 20.0);
                        view! {
                            <line x1="0" y1=y x2="100" y2=y stroke="var(--border-subtle)" stroke-width="0.5" stroke-dasharray="2"/>
                        }
                    }).collect::<Vec<_>>()}

                    <path d=fill_d fill="url(#revenueGradient)"/>
                    <path
                        d=line_d
                        fill="none"
                        stroke="var(--brand-primary)"
                        stroke-width="2"
                        vector-effect="non-scaling-stroke"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    />

                    {points.iter().map(|(x, y)| view! {
                        <circle cx=*x cy=*y r="1.5" fill="white" stroke="var(--brand-primary)" stroke-width="0.5" vector-effect="non-scaling-stroke"/>
                    }).collect::<Vec<_>>()}
                </svg>

                {points.iter().zip(REVENUE).map(|((x, y), r)| view! {
                    <div style=format!("position: absolute; left: {x}%; top: {y}%; transform: translate(-50%, -100%); margin-top: -8px; font-size: 0.7rem; font-weight: 600; color: var(--brand-dark); pointer-events: none;")>
                        {format_inr(r.amount / 100_000)} "L"
                    </div>
                }).collect::<Vec<_>>()}

                {REVENUE.iter().enumerate().map(|(i, r)| {
                    let x = get_x(i);
                    view! {
                        <div style=format!("position: absolute; left: {x}%; bottom: -22px; transform: translateX(-50%); font-size: 0.8rem; color: var(--text-muted);")>
                            {r.month}
                        </div>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn RecentTransactions(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <div style="background: var(--bg-surface); padding: 1.5rem; border-radius: var(--radius-lg); border: 1px solid var(--border-subtle);">
            <h3 style="font-size: 1.1rem; font-weight: 600; color: var(--text-heading); margin: 0 0 1rem 0;">{title}</h3>
            <div style="display: flex; flex-direction: column;">
                <For
                    each=|| RECENT.iter().copied()
                    key=|txn| txn.id
                    children=|txn| view! {
                        <div style="display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 0; border-bottom: 1px solid var(--border-subtle);">
                            <div>
                                <p style="margin: 0; font-weight: 600; color: var(--text-heading); font-size: 0.95rem;">{txn.store}</p>
                                <p style="margin: 0; font-size: 0.8rem; color: var(--text-muted);">{txn.id} " · " {txn.date}</p>
                            </div>
                            <span style="font-weight: 700; color: var(--brand-dark);">{format_inr(txn.amount)}</span>
                        </div>
                    }
                />
            </div>
        </div>
    }
}
