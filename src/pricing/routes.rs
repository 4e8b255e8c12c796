//! HTTP handlers for the pricing API.

use axum::{extract::State, routing::post, Json, Router};

use crate::error::Result;
use crate::AppState;

use super::requests::{NetRevenueRequest, QuoteRequest, RevenueSummaryRequest};
use super::responses::{NetRevenueResponse, QuoteResponse, RevenueSummaryResponse};
use super::services;

/// Pricing routes, nested under `/api/pricing`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quote", post(quote))
        .route("/net-revenue", post(net_revenue))
        .route("/revenue-summary", post(revenue_summary))
}

/// Price a stay for the booking page or checkout
pub async fn quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>> {
    let currency = state.currency(request.currency.as_deref())?;
    let (stay, result) = services::quote_booking(&request)?;

    let response = QuoteResponse::new(&stay, result, &currency);
    tracing::info!(
        quote_id = %response.quote_id,
        payable = %response.total_payable.amount,
        "Quote issued"
    );
    Ok(Json(response))
}

/// Owner revenue for one transaction
pub async fn net_revenue(
    State(state): State<AppState>,
    Json(request): Json<NetRevenueRequest>,
) -> Result<Json<NetRevenueResponse>> {
    let currency = state.currency(request.currency.as_deref())?;
    let result = services::net_revenue(&request.transaction())?;
    Ok(Json(NetRevenueResponse::new(result, &currency)))
}

/// Aggregated owner revenue for dashboards
pub async fn revenue_summary(
    State(state): State<AppState>,
    Json(request): Json<RevenueSummaryRequest>,
) -> Result<Json<RevenueSummaryResponse>> {
    let currency = state.currency(request.currency.as_deref())?;
    let summary = services::summarize_revenue(&request.transactions)?;
    Ok(Json(RevenueSummaryResponse::new(summary, &currency)))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::{create_router, AppState};

    async fn post_json(uri: &str, body: Value) -> Result<(StatusCode, Value), Box<dyn std::error::Error>> {
        let app = create_router(AppState::new(Config::default()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .method(Method::POST)
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&body)?))?,
            )
            .await?;

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, serde_json::from_slice(&body)?))
    }

    fn quote_body() -> Value {
        json!({
            "check_in": "2024-03-01",
            "check_out": "2024-03-03",
            "guests": 2,
            "rooms": [
                { "room_id": "deluxe", "name": "Deluxe", "rate": "1000", "no_of_rooms": 1 },
                { "room_id": "suite", "name": "Suite", "rate": "4000", "no_of_rooms": 0 }
            ],
            "taxes": [
                { "name": "CGST", "rate": "5.7" },
                { "name": "SGST", "rate": "2.5" },
                { "name": "Tourism", "rate": "2.2" },
                { "name": "Service", "rate": "4" }
            ],
            "offer": {
                "offer_type": "Flat_Discount",
                "coupon_code": "FLAT200",
                "flat_discount": "200",
                "minimum_booking_amount": "1000"
            }
        })
    }

    #[tokio::test]
    async fn test_quote_with_flat_offer() -> Result<(), Box<dyn std::error::Error>> {
        let (status, body) = post_json("/api/pricing/quote", quote_body()).await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["nights"], 2);
        assert_eq!(body["gross_total"]["amount"], "2000.00");
        assert_eq!(body["is_offer_applied"], true);
        assert_eq!(body["offer"]["status"], "applied");
        assert_eq!(body["offer"]["coupon_code"], "FLAT200");
        assert_eq!(body["discount"]["amount"], "200.00");
        assert_eq!(body["total_tax"]["amount"], "259.20");
        assert_eq!(body["total_payable"]["amount"], "2059.20");
        assert_eq!(body["total_payable"]["currency"], "INR");
        assert_eq!(body["taxes"].as_array().map(Vec::len), Some(4));
        Ok(())
    }

    #[tokio::test]
    async fn test_quote_below_minimum_reports_shortfall() -> Result<(), Box<dyn std::error::Error>> {
        let mut body = quote_body();
        body["offer"]["minimum_booking_amount"] = json!("2500");
        body["currency"] = json!("usd");

        let (status, body) = post_json("/api/pricing/quote", body).await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["is_offer_applied"], false);
        assert_eq!(body["offer"]["status"], "below_minimum");
        assert_eq!(body["offer"]["shortfall"], "500");
        assert_eq!(body["total_payable"]["amount"], "2288.00");
        assert_eq!(body["total_payable"]["currency"], "USD");
        Ok(())
    }

    #[tokio::test]
    async fn test_quote_rejects_checkout_before_checkin() -> Result<(), Box<dyn std::error::Error>> {
        let mut body = quote_body();
        body["check_out"] = json!("2024-02-28");

        let (status, body) = post_json("/api/pricing/quote", body).await?;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error_type"], "invalid_stay");
        Ok(())
    }

    #[tokio::test]
    async fn test_quote_rejects_bad_currency() -> Result<(), Box<dyn std::error::Error>> {
        let mut body = quote_body();
        body["currency"] = json!("rupees");

        let (status, body) = post_json("/api/pricing/quote", body).await?;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error_type"], "bad_request");
        Ok(())
    }

    #[tokio::test]
    async fn test_net_revenue_online() -> Result<(), Box<dyn std::error::Error>> {
        let (status, body) = post_json(
            "/api/pricing/net-revenue",
            json!({ "total_cost": "2288", "payment_method": "ONLINE_PAYMENT" }),
        )
        .await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["platform_fee"]["amount"], "114.40");
        assert_eq!(body["net_revenue"]["amount"], "2173.60");
        assert_eq!(body["payment_label"], "Paid online");
        Ok(())
    }

    #[tokio::test]
    async fn test_revenue_summary() -> Result<(), Box<dyn std::error::Error>> {
        let (status, body) = post_json(
            "/api/pricing/revenue-summary",
            json!({
                "transactions": [
                    { "total_cost": "1000", "payment_method": "ONLINE_PAYMENT" },
                    { "total_cost": "400", "payment_method": "AT_CHECK_IN" }
                ]
            }),
        )
        .await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["transaction_count"], 2);
        assert_eq!(body["net_revenue"]["amount"], "1350.00");
        assert_eq!(body["by_payment_method"][1]["payment_method"], "AT_CHECK_IN");
        assert_eq!(body["by_payment_method"][1]["badge"]["tone"], "info");
        Ok(())
    }

    const DECIMAL_MAX: &str = "79228162514264337593543950335";

    #[tokio::test]
    async fn test_quote_reports_amount_overflow() -> Result<(), Box<dyn std::error::Error>> {
        let mut body = quote_body();
        body["rooms"][0]["rate"] = json!(DECIMAL_MAX);

        let (status, body) = post_json("/api/pricing/quote", body).await?;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error_type"], "amount_overflow");
        Ok(())
    }

    #[tokio::test]
    async fn test_net_revenue_reports_amount_overflow() -> Result<(), Box<dyn std::error::Error>> {
        let (status, body) = post_json(
            "/api/pricing/net-revenue",
            json!({ "total_cost": DECIMAL_MAX, "payment_method": "ONLINE_PAYMENT" }),
        )
        .await?;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error_type"], "amount_overflow");
        Ok(())
    }

    #[tokio::test]
    async fn test_revenue_summary_reports_amount_overflow() -> Result<(), Box<dyn std::error::Error>> {
        let (status, body) = post_json(
            "/api/pricing/revenue-summary",
            json!({
                "transactions": [
                    { "total_cost": DECIMAL_MAX, "payment_method": "AT_CHECK_IN" },
                    { "total_cost": DECIMAL_MAX, "payment_method": "AT_CHECK_IN" }
                ]
            }),
        )
        .await?;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error_type"], "amount_overflow");
        Ok(())
    }
}
