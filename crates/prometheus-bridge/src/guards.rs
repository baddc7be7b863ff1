use crate::GuardMetrics;
use nbt_core::{TagCompound, ValidationConfig};
use nbt_guards::{check_inbound, check_outbound, CheckRegistry, Direction, NbtRejection};

pub fn check_inbound_observed(
    metrics: &GuardMetrics,
    checks: &CheckRegistry,
    slot: i32,
    tag: &dyn TagCompound,
    item_name: &str,
    packet_name: &str,
    config: &dyn ValidationConfig,
) -> Result<(), NbtRejection> {
    let result = check_inbound(checks, slot, tag, item_name, packet_name, config);
    metrics.observe_decision(checks, Direction::Inbound, &result);
    result
}

pub fn check_outbound_observed(
    metrics: &GuardMetrics,
    checks: &CheckRegistry,
    slot: i32,
    tag: &dyn TagCompound,
    item_name: &str,
    packet_name: &str,
    config: &dyn ValidationConfig,
) -> Result<(), NbtRejection> {
    let result = check_outbound(checks, slot, tag, item_name, packet_name, config);
    metrics.observe_decision(checks, Direction::Outbound, &result);
    result
}
