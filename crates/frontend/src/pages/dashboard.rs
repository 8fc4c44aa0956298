//! Dashboard page component.

use records::{Role, SaleStatus};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::{StatAccent, StatCard};
use crate::state::{SalesStore, UsersStore};

/// Dashboard page component.
///
/// User count and completed-sales revenue come from the live stores;
/// purchases and product counts are static sample figures.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let users = use_context::<UsersStore>().expect("users store not provided");
    let sales = use_context::<SalesStore>().expect("sales store not provided");

    let admin_count = users
        .store
        .list()
        .iter()
        .filter(|u| u.role == Role::Admin)
        .count();

    let completed: Vec<f64> = sales
        .store
        .list()
        .iter()
        .filter(|s| s.status == SaleStatus::Completed)
        .map(|s| s.total)
        .collect();
    let completed_revenue: f64 = completed.iter().sum();

    let recent_activity = [
        ("Nueva venta", "Juan Pérez", "Hace 5 minutos"),
        ("Nuevo usuario", "María García", "Hace 1 hora"),
        ("Compra registrada", "Admin", "Hace 3 horas"),
        ("Producto actualizado", "Carlos López", "Hace 5 horas"),
        ("Venta cancelada", "Ana Martínez", "Hace 1 día"),
    ];

    html! {
        <div>
            <h1>{"Dashboard"}</h1>

            <div class="stats-grid">
                <StatCard
                    value={users.store.len().to_string()}
                    label={"Total Usuarios"}
                    accent={StatAccent::Sky}
                    detail={format!("{admin_count} administradores")}
                />
                <StatCard
                    value={format!("${:.2}", completed_revenue)}
                    label={"Ventas Completadas"}
                    accent={StatAccent::Green}
                    detail={format!("{} de {} ventas", completed.len(), sales.store.len())}
                />
                <StatCard
                    value={"$8,234"}
                    label={"Compras Mensuales"}
                    accent={StatAccent::Purple}
                />
                <StatCard
                    value={"532"}
                    label={"Productos"}
                    accent={StatAccent::Orange}
                />
            </div>

            <div class="dashboard-grid">
                <div class="card">
                    <div class="card-header">
                        <h2 class="card-title">{"Actividad Reciente"}</h2>
                    </div>
                    <ul class="activity-list">
                        { for recent_activity.iter().map(|(action, who, when)| {
                            html! {
                                <li class="activity-item">
                                    <div>
                                        <p class="activity-action">{*action}</p>
                                        <p class="activity-meta">{format!("Por: {who}")}</p>
                                    </div>
                                    <p class="activity-meta">{*when}</p>
                                </li>
                            }
                        })}
                    </ul>
                </div>

                <div class="card">
                    <div class="card-header">
                        <h2 class="card-title">{"Accesos Rápidos"}</h2>
                    </div>
                    <div class="quick-links">
                        <Link<Route> to={Route::Sales} classes="quick-link">
                            {"Nueva Venta"}
                        </Link<Route>>
                        <Link<Route> to={Route::NewUser} classes="quick-link">
                            {"Nuevo Usuario"}
                        </Link<Route>>
                        <Link<Route> to={Route::Users} classes="quick-link">
                            {"Ver Usuarios"}
                        </Link<Route>>
                        <Link<Route> to={Route::Sales} classes="quick-link">
                            {"Ver Reportes"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </div>
    }
}
