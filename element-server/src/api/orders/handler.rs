//! Order API Handlers

use axum::{Json, extract::State};

use crate::audit_log;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_text_len,
};
use shared::client::CreateOrderRequest;
use shared::configurator::{OrderForm, Selection, SessionHandle};
use shared::models::Order;

/// 长度校验；必填项与同意勾选由 OrderForm 按固定顺序检查
fn validate_lengths(req: &CreateOrderRequest) -> AppResult<()> {
    validate_text_len(&req.name, "name", MAX_NAME_LEN)?;
    validate_text_len(&req.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_text_len(&req.comment, "comment", MAX_NOTE_LEN)?;

    let config = &req.selection.configuration;
    validate_text_len(&config.custom_wood, "customWood", MAX_SHORT_TEXT_LEN)?;
    validate_text_len(&config.leather_animal, "leatherAnimal", MAX_SHORT_TEXT_LEN)?;
    validate_text_len(&config.custom_color, "customColor", MAX_SHORT_TEXT_LEN)?;
    validate_text_len(&config.custom_interior, "customInterior", MAX_NOTE_LEN)?;
    Ok(())
}

/// POST /api/orders - 提交配置器订单
///
/// 服务器根据选择快照重新推导订单载荷，不信任客户端计算结果。
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(req): Json<CreateOrderRequest>,
) -> AppResult<Json<Order>> {
    validate_lengths(&req)?;

    let selection = Selection::from_snapshot(state.catalog.clone(), &req.selection)?;

    let mut form = OrderForm::new(selection);
    form.set_name(req.name);
    form.set_phone(req.phone);
    form.set_comment(req.comment);
    form.set_consent(req.consent);

    let session = SessionHandle::new();
    session.sign_in(user.id.clone());

    let order = form.submit(&state.order_submitter(), &session).await?;

    audit_log!(user.id.as_str(), "create", format!("order:{}", order.id));

    Ok(Json(order))
}

/// GET /api/orders/mine - 当前用户的订单，最新在前
pub async fn list_mine(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<Order>>> {
    Ok(Json(state.orders().list_by_user(&user.id)?))
}
