use common::Page;
use yew::prelude::*;

use crate::api_client::admin_shop::{
    delete_notification, list_notifications, mark_all_notifications_read, mark_notification_read,
    Notification,
};
use crate::common::data_table::use_data_table;
use crate::common::toast::ToastContext;
use crate::components::common::forms::input_checked;
use crate::components::common::page_header::PageHeader;
use crate::components::common::pagination::Pagination;

fn severity_badge(severity: &str) -> &'static str {
    match severity {
        "critical" => "badge-error",
        "error" => "badge-error badge-outline",
        "warning" => "badge-warning",
        _ => "badge-info",
    }
}

#[function_component(AdminNotifications)]
pub fn admin_notifications() -> Html {
    let toast = use_context::<ToastContext>().expect("ToastProvider is missing");
    let unread_only = use_state(|| false);

    let table = {
        let unread_only = unread_only.clone();
        let toast = toast.clone();
        use_data_table(
            move |query| {
                let unread = *unread_only;
                async move {
                    let response =
                        list_notifications(unread, Some(query.page), Some(query.per_page)).await?;
                    Ok(Page {
                        items: response.notifications,
                        total: response.total,
                    })
                }
            },
            Some(Callback::from(move |error: String| {
                toast.show_error_detail("Failed to load notifications", error);
            })),
        )
    };

    let on_unread_toggle = {
        let unread_only = unread_only.clone();
        let refresh = table.refresh();
        Callback::from(move |e: InputEvent| {
            unread_only.set(input_checked(&e));
            refresh.emit(());
        })
    };

    let on_mark_read = {
        let toast = toast.clone();
        let refresh = table.refresh();
        Callback::from(move |id: i64| {
            let toast = toast.clone();
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match mark_notification_read(id).await {
                    Ok(_) => refresh.emit(()),
                    Err(e) => toast.show_error_detail("Failed to mark as read", e),
                }
            });
        })
    };

    let on_mark_all = {
        let toast = toast.clone();
        let refresh = table.refresh();
        Callback::from(move |_| {
            let toast = toast.clone();
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match mark_all_notifications_read().await {
                    Ok(_) => {
                        toast.show_success("All notifications marked as read");
                        refresh.emit(());
                    }
                    Err(e) => toast.show_error_detail("Failed to mark all as read", e),
                }
            });
        })
    };

    let on_delete = {
        let toast = toast.clone();
        let refresh = table.refresh();
        Callback::from(move |id: i64| {
            let toast = toast.clone();
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match delete_notification(id).await {
                    Ok(_) => {
                        toast.show_success("Notification deleted");
                        refresh.emit(());
                    }
                    Err(e) => toast.show_error_detail("Failed to delete notification", e),
                }
            });
        })
    };

    let items = table.items();

    html! {
        <>
            <PageHeader
                title="Notifications"
                action_label="Mark all read"
                on_action={on_mark_all}
            />

            <label class="label cursor-pointer justify-start gap-3 mb-2 w-fit">
                <input
                    type="checkbox"
                    class="toggle toggle-sm"
                    checked={*unread_only}
                    oninput={on_unread_toggle}
                />
                <span class="label-text">{"Unread only"}</span>
            </label>

            if table.loading() {
                <div class="flex justify-center items-center py-8">
                    <span class="loading loading-spinner loading-lg"></span>
                </div>
            } else if items.is_empty() {
                <div class="text-center py-8">
                    <p class="text-gray-500">{"Nothing to see here."}</p>
                </div>
            } else {
                <div class="space-y-2">
                    {for items.iter().map(|notification: &Notification| {
                        let id = notification.id;
                        let unread = notification.is_unread();
                        let mark_read = {
                            let on_mark_read = on_mark_read.clone();
                            Callback::from(move |_| on_mark_read.emit(id))
                        };
                        let delete = {
                            let on_delete = on_delete.clone();
                            Callback::from(move |_| on_delete.emit(id))
                        };
                        html! {
                            <div
                                key={id}
                                class={classes!(
                                    "card", "bg-base-100", "shadow-sm",
                                    unread.then_some("border-l-4 border-primary")
                                )}
                            >
                                <div class="card-body py-3 px-4 flex-row items-center justify-between">
                                    <div>
                                        <div class="flex items-center gap-2">
                                            <span class={classes!("badge", "badge-sm", severity_badge(&notification.severity))}>
                                                {&notification.severity}
                                            </span>
                                            <span class="font-medium">{&notification.title}</span>
                                        </div>
                                        <p class="text-sm text-base-content/70">{&notification.message}</p>
                                        <p class="text-xs text-base-content/50">
                                            {notification.created_at.clone().unwrap_or_default()}
                                        </p>
                                    </div>
                                    <div class="flex gap-1">
                                        if unread {
                                            <button class="btn btn-ghost btn-xs" onclick={mark_read}>
                                                <i class="fas fa-check"></i> {" Read"}
                                            </button>
                                        }
                                        <button class="btn btn-ghost btn-xs text-error" onclick={delete}>
                                            <i class="fas fa-trash"></i>
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    })}
                </div>
            }

            <Pagination
                current_page={table.page()}
                total_items={table.total_records()}
                items_per_page={table.per_page()}
                on_page_change={table.go_to_page()}
            />
        </>
    }
}
