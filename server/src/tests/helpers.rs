#[cfg(test)]
pub mod tests {
    use actix_http::Request;
    use actix_service::Service;
    use actix_web::{dev::ServiceResponse, error::Error, test, web::Data, App};
    use serde::{de::DeserializeOwned, Serialize};
    use serde_json;

    use crate::routes::routes;

    pub async fn get_service() -> impl Service<Request, Response = ServiceResponse, Error = Error>
    {
        test::init_service(
            App::new()
                .app_data(Data::new(db::new_pool()))
                .configure(routes),
        )
        .await
    }

    async fn read_json_body<R>(res: ServiceResponse) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let status = res.status().as_u16();
        let body = test::read_body(res).await;
        let json_body = serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!(
                "could not deserialize response. body: {} status: {}",
                String::from_utf8(body.to_vec())
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        });

        (status, json_body)
    }

    /// Helper for HTTP GET integration tests
    pub async fn test_get<R>(route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let app = get_service().await;
        let req = test::TestRequest::get().uri(route).to_request();
        let res = test::call_service(&app, req).await;

        read_json_body(res).await
    }

    /// Helper for HTTP POST integration tests
    pub async fn test_post<T: Serialize, R>(route: &str, params: T) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let app = get_service().await;
        let req = test::TestRequest::post()
            .set_json(&params)
            .uri(route)
            .to_request();
        let res = test::call_service(&app, req).await;

        read_json_body(res).await
    }

    /// Helper for HTTP DELETE integration tests
    pub async fn test_delete<R>(route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let app = get_service().await;
        let req = test::TestRequest::delete().uri(route).to_request();
        let res = test::call_service(&app, req).await;

        read_json_body(res).await
    }
}
