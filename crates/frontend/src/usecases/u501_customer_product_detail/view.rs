use super::view_model::CustomerProductDetailViewModel;
use crate::shared::config::load_app_config;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use contracts::projections::p900_service_pricing::{table_columns, CellAlignment, TableColumn};
use leptos::prelude::*;
use thaw::{
    Button, ButtonAppearance, Spinner, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

fn cell_class(column: &TableColumn) -> &'static str {
    match column.alignment {
        CellAlignment::Center => "text-center",
        CellAlignment::Left => "",
    }
}

#[component]
pub fn CustomerProductDetail(
    /// Case record id supplied by the hosting page
    #[prop(into)]
    case_id: Signal<String>,
) -> impl IntoView {
    let vm = CustomerProductDetailViewModel::new(load_app_config());

    // Reload whenever the host hands over another case
    Effect::new(move |_| {
        vm.load(case_id.get());
    });

    let [type_column, value_column] = table_columns();
    let type_class = cell_class(&type_column);
    let value_class = cell_class(&value_column);

    view! {
        <PageFrame page_id="u501_customer_product_detail--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Customer Product Detail"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| vm.refresh()
                        disabled=Signal::derive(move || vm.is_loading())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || vm.is_loading()>
                    <div style="padding: 24px; text-align: center;">
                        <Spinner />
                    </div>
                </Show>

                {move || vm.error_message().map(|e| view! {
                    <div class="error" style="padding: 12px; color: var(--thaw-color-error-foreground-1);">
                        {e}
                    </div>
                })}

                <Show when=move || vm.has_no_contact()>
                    <div style="padding: 12px; color: var(--thaw-color-neutral-foreground-2);">
                        "This case has no related contact."
                    </div>
                </Show>

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=!type_column.hide_default_actions class=type_class>
                                {type_column.label}
                            </TableHeaderCell>
                            <TableHeaderCell resizable=!value_column.hide_default_actions class=value_class>
                                {value_column.label}
                            </TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || vm.rows()
                            key=|row| (row.id.clone(), row.service_type.clone(), row.formatted_amount.clone())
                            children=move |row| {
                                view! {
                                    <TableRow>
                                        <TableCell class=type_class>
                                            <TableCellLayout>{row.service_type}</TableCellLayout>
                                        </TableCell>
                                        <TableCell class=value_class>
                                            <TableCellLayout>{row.formatted_amount}</TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>
        </PageFrame>
    }
}
