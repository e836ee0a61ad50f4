use ectopica_core::models::risk::{HcgTrend, HcgZone};
use ectopica_scoring::tables::trend_lr;
use ectopica_scoring::trend::{classify_trend, hcg_zone};

#[test]
fn any_rise_is_an_increase() {
    assert_eq!(classify_trend(Some(1001.0), Some(1000.0)), HcgTrend::Increase);
    assert_eq!(classify_trend(Some(5.0), Some(0.0)), HcgTrend::Increase);
}

#[test]
fn reduction_boundaries_are_inclusive() {
    assert_eq!(
        classify_trend(Some(500.0), Some(1000.0)),
        HcgTrend::ReductionAtLeast50
    );
    assert_eq!(
        classify_trend(Some(650.0), Some(1000.0)),
        HcgTrend::Reduction35To50
    );
    assert_eq!(
        classify_trend(Some(990.0), Some(1000.0)),
        HcgTrend::Reduction1To35
    );
}

#[test]
fn decimal_values_on_a_boundary_stay_on_it() {
    assert_eq!(classify_trend(Some(0.78), Some(1.2)), HcgTrend::Reduction35To50);
    assert_eq!(classify_trend(Some(0.195), Some(0.3)), HcgTrend::Reduction35To50);
    assert_eq!(classify_trend(Some(1.69), Some(2.6)), HcgTrend::Reduction35To50);
    assert_eq!(classify_trend(Some(0.6), Some(1.2)), HcgTrend::ReductionAtLeast50);
    assert_eq!(classify_trend(Some(0.297), Some(0.3)), HcgTrend::Reduction1To35);
}

#[test]
fn reduction_below_one_percent_counts_as_increase() {
    assert_eq!(classify_trend(Some(995.0), Some(1000.0)), HcgTrend::Increase);
    assert_eq!(classify_trend(Some(1000.0), Some(1000.0)), HcgTrend::Increase);
}

#[test]
fn missing_values_are_unavailable() {
    assert_eq!(classify_trend(None, Some(1000.0)), HcgTrend::Unavailable);
    assert_eq!(classify_trend(Some(1000.0), None), HcgTrend::Unavailable);
    assert_eq!(classify_trend(Some(0.0), Some(0.0)), HcgTrend::Unavailable);
}

#[test]
fn trend_ratios() {
    assert_eq!(trend_lr(HcgTrend::ReductionAtLeast50), 0.01);
    assert_eq!(trend_lr(HcgTrend::Reduction35To50), 0.8);
    assert_eq!(trend_lr(HcgTrend::Reduction1To35), 16.6);
    assert_eq!(trend_lr(HcgTrend::Increase), 3.3);
    assert_eq!(trend_lr(HcgTrend::Unavailable), 1.0);
}

#[test]
fn zone_boundary() {
    assert_eq!(hcg_zone(2000.0), HcgZone::High);
    assert_eq!(hcg_zone(1999.0), HcgZone::Low);
    assert_eq!(hcg_zone(0.0), HcgZone::Low);
}
