use crate::model::CustomerId;

/// One baked unit, tagged with its 1-based position within the order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bread {
    pub customer: CustomerId,
    pub sequence: u32,
}

impl Bread {
    /// The breads numbered `first..first + count` for one customer.
    pub fn batch(customer: &CustomerId, first: u32, count: u32) -> Vec<Bread> {
        (first..first + count)
            .map(|sequence| Bread {
                customer: customer.clone(),
                sequence,
            })
            .collect()
    }
}
