//! PaymentService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use tracing::subscriber::DefaultGuard;

    use cardpay_types::{Decimal, GatewayError, PaymentGateway, SaleResult, ServiceError};

    use crate::PaymentService;

    /// Gateway double that records calls and replays canned outcomes.
    pub struct StubGateway {
        tokenize_outcome: Result<String, GatewayError>,
        charge_outcome: Result<SaleResult, GatewayError>,
        pub tokenize_calls: Mutex<Vec<(String, String)>>,
        pub charge_calls: Mutex<Vec<(String, Decimal)>>,
    }

    impl StubGateway {
        pub fn new() -> Self {
            Self {
                tokenize_outcome: Ok("tok_abc".into()),
                charge_outcome: Ok(SaleResult::new("txn_1", "submitted_for_settlement")),
                tokenize_calls: Mutex::new(Vec::new()),
                charge_calls: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(err: GatewayError) -> Self {
            Self {
                tokenize_outcome: Err(err.clone()),
                charge_outcome: Err(err),
                ..Self::new()
            }
        }
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn lines(&self) -> Vec<String> {
            String::from_utf8_lossy(&self.0.lock().unwrap())
                .lines()
                .map(String::from)
                .collect()
        }
    }

    fn capture_logs() -> (LogBuffer, DefaultGuard) {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        (buffer, tracing::subscriber::set_default(subscriber))
    }

    #[async_trait]
    impl PaymentGateway for StubGateway {
        async fn tokenize(
            &self,
            card_number: &str,
            expiry_date: &str,
        ) -> Result<String, GatewayError> {
            self.tokenize_calls
                .lock()
                .unwrap()
                .push((card_number.to_string(), expiry_date.to_string()));
            self.tokenize_outcome.clone()
        }

        async fn charge(&self, token: &str, amount: Decimal) -> Result<SaleResult, GatewayError> {
            self.charge_calls
                .lock()
                .unwrap()
                .push((token.to_string(), amount));
            self.charge_outcome.clone()
        }
    }

    #[tokio::test]
    async fn test_tokenize_properly_delegated() {
        let service = PaymentService::new(StubGateway::new());

        let token = service
            .tokenize("4111111111111111", "12/2020")
            .await
            .unwrap();

        assert_eq!(token, "tok_abc");
        let calls = service.gateway().tokenize_calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![("4111111111111111".to_string(), "12/2020".to_string())]
        );
    }

    #[tokio::test]
    async fn test_tokenize_gateway_error() {
        let service = PaymentService::new(StubGateway::failing(GatewayError::Connectivity(
            "Connection issues".into(),
        )));

        let result = service.tokenize("4111111111111111", "12/2020").await;

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Connection issues");
        assert!(matches!(err.kind(), GatewayError::Connectivity(_)));
    }

    #[tokio::test]
    async fn test_sale_properly_delegated() {
        let service = PaymentService::new(StubGateway::new());

        let sale = service.sale("tok_abc", dec!(100.50)).await.unwrap();

        assert_eq!(sale, SaleResult::new("txn_1", "submitted_for_settlement"));
        let calls = service.gateway().charge_calls.lock().unwrap();
        assert_eq!(*calls, vec![("tok_abc".to_string(), dec!(100.50))]);
    }

    #[tokio::test]
    async fn test_sale_logs_id_and_status_once() {
        let (logs, _guard) = capture_logs();
        let service = PaymentService::new(StubGateway::new());

        service.sale("tok_abc", dec!(100.50)).await.unwrap();

        let lines = logs.lines();
        assert_eq!(lines.len(), 1, "{:?}", lines);
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("Sale requested successfully"));
        assert!(lines[0].contains("txn_1"));
        assert!(lines[0].contains("submitted_for_settlement"));
        assert!(!lines[0].contains("Some("));
    }

    #[tokio::test]
    async fn test_failed_sale_is_not_logged_as_success() {
        let (logs, _guard) = capture_logs();
        let service = PaymentService::new(StubGateway::failing(GatewayError::Connectivity(
            "Connection issues".into(),
        )));

        service.sale("tok_abc", dec!(1)).await.unwrap_err();

        assert!(
            logs.lines()
                .iter()
                .all(|line| !line.contains("Sale requested successfully"))
        );
    }

    #[tokio::test]
    async fn test_sale_gateway_error() {
        let service = PaymentService::new(StubGateway::failing(GatewayError::Business(
            "Something bad happened".into(),
        )));

        let result = service.sale("tok_abc", dec!(100)).await;

        assert_eq!(
            result,
            Err(ServiceError::from(GatewayError::Business(
                "Something bad happened".into()
            )))
        );
    }

    #[tokio::test]
    async fn test_every_error_kind_keeps_its_message() {
        let errors = [
            GatewayError::Connectivity("Connection issues".into()),
            GatewayError::Protocol("Unexpected data format".into()),
            GatewayError::Business("m1 m2".into()),
            GatewayError::DataMissing("Braintree misbehavior: data is missing".into()),
        ];

        for gateway_err in errors {
            let expected = gateway_err.to_string();
            let service = PaymentService::new(StubGateway::failing(gateway_err.clone()));

            let err = service.sale("tok", dec!(1)).await.unwrap_err();

            assert_eq!(err.to_string(), expected);
            assert_eq!(err.kind(), &gateway_err);
        }
    }

    #[tokio::test]
    async fn test_service_accepts_shared_gateway() {
        let gateway = std::sync::Arc::new(StubGateway::new());
        let service = PaymentService::new(gateway.clone());

        service.tokenize("4111111111111111", "01/30").await.unwrap();

        assert_eq!(gateway.tokenize_calls.lock().unwrap().len(), 1);
    }
}
