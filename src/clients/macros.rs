/// Generates a client method that models the network round trip: a latency
/// sleep, the request send, and the oneshot response. Channel failures in
/// either direction surface as [`ServiceError::Disconnected`], the only
/// failure with no backend-provided message.
///
/// [`ServiceError::Disconnected`]: crate::service::ServiceError::Disconnected
#[macro_export]
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, latency = $latency:expr) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $crate::service::ServiceError> {
                tracing::debug!("Sending request");
                tokio::time::sleep($latency).await;
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender
                    .send($request::$variant { $($param,)* respond_to })
                    .await
                    .map_err(|_| $crate::service::ServiceError::Disconnected)?;
                response
                    .await
                    .map_err(|_| $crate::service::ServiceError::Disconnected)?
            }
        }
    };
}
