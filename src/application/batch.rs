use crate::domain::arithmetic::evaluate_symbol;
use crate::domain::discount::{DiscountPercent, Price, quote};
use crate::error::Result;
use crate::interfaces::csv::record_writer::RecordWriter;
use crate::interfaces::csv::records::{
    DiscountRecord, DiscountRequest, OperationRecord, OperationRequest,
};
use crate::interfaces::csv::request_reader::{RequestReader, error_line};
use crate::interfaces::input::parse_number;
use std::io::{Read, Write};
use tracing::{info, warn};

/// Counts reported at the end of a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    /// Rows that produced an output record, including rows whose `error`
    /// column is set.
    pub written: usize,
    /// Rows that could not be read at all.
    pub skipped: usize,
}

/// Evaluates one discount request. Non-numeric cells end up in `error`.
pub fn discount_record(request: DiscountRequest) -> DiscountRecord {
    let parsed = parse_number(&request.price).and_then(|price| {
        parse_number(&request.discount_percent).map(|percent| (price, percent))
    });

    match parsed {
        Ok((price, percent)) => {
            let q = quote(Price::new(price), DiscountPercent::new(percent));
            DiscountRecord {
                price: request.price,
                discount_percent: request.discount_percent,
                final_price: Some(q.final_price.value().normalize()),
                discounted: Some(q.discounted()),
                error: None,
            }
        }
        Err(e) => DiscountRecord {
            price: request.price,
            discount_percent: request.discount_percent,
            final_price: None,
            discounted: None,
            error: Some(e.to_string()),
        },
    }
}

/// Evaluates one arithmetic request. Parse and evaluation failures end up in
/// `error`.
pub fn operation_record(request: OperationRequest) -> OperationRecord {
    let result = parse_number(&request.a).and_then(|a| {
        let b = parse_number(&request.b)?;
        evaluate_symbol(a, b, &request.operator)
    });

    let (result, error) = match result {
        Ok(value) => (Some(value.normalize()), None),
        Err(e) => (None, Some(e.to_string())),
    };

    OperationRecord {
        a: request.a,
        b: request.b,
        operator: request.operator,
        result,
        error,
    }
}

/// Runs a discount batch from `source` into `writer`.
pub fn run_discounts<R: Read, W: Write>(
    source: R,
    writer: RecordWriter<W>,
) -> Result<BatchSummary> {
    run(RequestReader::new(source), writer, discount_record)
}

/// Runs an arithmetic batch from `source` into `writer`.
pub fn run_operations<R: Read, W: Write>(
    source: R,
    writer: RecordWriter<W>,
) -> Result<BatchSummary> {
    run(RequestReader::new(source), writer, operation_record)
}

fn run<R, W, Req, Rec>(
    reader: RequestReader<R, Req>,
    mut writer: RecordWriter<W>,
    evaluate: impl Fn(Req) -> Rec,
) -> Result<BatchSummary>
where
    R: Read,
    W: Write,
    Req: serde::de::DeserializeOwned,
    Rec: serde::Serialize,
{
    let mut summary = BatchSummary::default();

    for request in reader.requests() {
        match request {
            Ok(request) => {
                writer.write(&evaluate(request))?;
                summary.written += 1;
            }
            Err(e) => {
                match error_line(&e) {
                    Some(line) => warn!(line, error = %e, "skipping unreadable row"),
                    None => warn!(error = %e, "skipping unreadable row"),
                }
                summary.skipped += 1;
            }
        }
    }

    writer.finish()?;
    info!(written = summary.written, skipped = summary.skipped, "batch complete");
    Ok(summary)
}
