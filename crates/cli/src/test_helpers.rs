//! Test helpers for command tests.

use std::sync::Arc;

use clap::Parser;
use storefront::products::ProductSnapshot;
use storefront_app::{
    context::StorefrontContext,
    domain::{
        orders::MockOrdersGateway,
        payments::MockPaymentProcessor,
        products::{MockProductsGateway, ProductsGatewayError},
    },
    notices::NoticeLog,
    storage::MemoryStore,
};

use crate::{
    commands::{CliError, Command},
    config::CliConfig,
};

/// A storefront context over in-memory storage and mocked gateways.
pub(crate) struct TestCli {
    pub ctx: StorefrontContext,
    pub notices: Arc<NoticeLog>,
}

impl TestCli {
    pub(crate) fn new(
        products: Vec<ProductSnapshot>,
        orders: MockOrdersGateway,
        payments: MockPaymentProcessor,
    ) -> Self {
        let notices = Arc::new(NoticeLog::new());

        let ctx = StorefrontContext::from_parts(
            Arc::new(catalog(products)),
            Arc::new(orders),
            Arc::new(payments),
            Arc::new(MemoryStore::new()),
            notices.clone(),
        );

        Self { ctx, notices }
    }

    pub(crate) fn with_catalog(products: Vec<ProductSnapshot>) -> Self {
        Self::new(
            products,
            MockOrdersGateway::new(),
            MockPaymentProcessor::new(),
        )
    }
}

/// Parse the arguments following the binary name into a command.
pub(crate) fn parse_command(args: &[&str]) -> Result<Command, clap::Error> {
    let argv = std::iter::once("storefront").chain(args.iter().copied());

    Ok(CliConfig::try_parse_from(argv)?.command)
}

/// Parse and run a command, returning what it wrote.
pub(crate) async fn run_command(cli: &TestCli, args: &[&str]) -> Result<String, CliError> {
    let command = parse_command(args)
        .map_err(|error| CliError::Io(std::io::Error::other(error.to_string())))?;

    let mut out = Vec::new();

    command.run(&cli.ctx, &mut out).await?;

    Ok(String::from_utf8_lossy(&out).into_owned())
}

fn catalog(products: Vec<ProductSnapshot>) -> MockProductsGateway {
    let mut gateway = MockProductsGateway::new();

    gateway.expect_get_product().returning(move |id| {
        products
            .iter()
            .find(|product| &product.id == id)
            .cloned()
            .ok_or_else(|| ProductsGatewayError::NotFound(id.clone()))
    });

    gateway
}
