use nbt_core::KEY_THRESHOLD;
use nbt_guards::{CheckRegistry, Direction, NbtRejection};
use prometheus::{IntCounterVec, Opts, Registry};

/// Label used for rejected keys that have no registered check, so hostile
/// key names cannot inflate label cardinality.
pub const UNREGISTERED_KEY_LABEL: &str = "unregistered";

pub struct GuardMetrics {
    pub nbt_guard_decisions_total: IntCounterVec,
    pub nbt_guard_rejections_total: IntCounterVec,
}

impl GuardMetrics {
    pub fn new(registry: &Registry) -> prometheus::Result<Self> {
        let nbt_guard_decisions_total = IntCounterVec::new(
            Opts::new(
                "nbt_guard_decisions_total",
                "Item NBT gatekeeper decisions",
            ),
            &["direction", "outcome"],
        )?;
        registry.register(Box::new(nbt_guard_decisions_total.clone()))?;

        let nbt_guard_rejections_total = IntCounterVec::new(
            Opts::new(
                "nbt_guard_rejections_total",
                "Item NBT rejections by offending key",
            ),
            &["direction", "key", "verdict"],
        )?;
        registry.register(Box::new(nbt_guard_rejections_total.clone()))?;

        Ok(Self {
            nbt_guard_decisions_total,
            nbt_guard_rejections_total,
        })
    }

    pub fn observe_decision(
        &self,
        checks: &CheckRegistry,
        direction: Direction,
        result: &Result<(), NbtRejection>,
    ) {
        let rejection = match result {
            Ok(()) => {
                self.nbt_guard_decisions_total
                    .with_label_values(&[direction.as_str(), "accepted"])
                    .inc();
                return;
            }
            Err(rejection) => rejection,
        };

        let outcome = if rejection.critical {
            "rejected_critical"
        } else {
            "rejected"
        };
        self.nbt_guard_decisions_total
            .with_label_values(&[direction.as_str(), outcome])
            .inc();

        let key = if rejection.key == KEY_THRESHOLD || checks.lookup(&rejection.key).is_some() {
            rejection.key.as_str()
        } else {
            UNREGISTERED_KEY_LABEL
        };
        self.nbt_guard_rejections_total
            .with_label_values(&[direction.as_str(), key, rejection.verdict.as_str()])
            .inc();
    }
}
