//! Placement order for the greedy engines
//!
//! Both engines are order dependent: a room placed early claims its zone and
//! every later room routes around it.

use std::cmp::Ordering;

use crate::rooms::request::RoomRequest;

fn by_area_descending(a: &RoomRequest, b: &RoomRequest) -> Ordering {
    b.area().partial_cmp(&a.area()).unwrap_or(Ordering::Equal)
}

/// Indices of `requests` sorted by room-type priority, larger rooms first within a type
///
/// The sort is stable, so equal rooms keep their input order.
pub fn placement_order(requests: &[RoomRequest]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..requests.len()).collect();
    indices.sort_by(|&a, &b| match (requests.get(a), requests.get(b)) {
        (Some(ra), Some(rb)) => ra
            .room_type
            .priority()
            .cmp(&rb.room_type.priority())
            .then_with(|| by_area_descending(ra, rb)),
        _ => Ordering::Equal,
    });
    indices
}

/// Indices of `requests` sorted by area, largest first (stable)
pub fn area_order(requests: &[RoomRequest]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..requests.len()).collect();
    indices.sort_by(|&a, &b| match (requests.get(a), requests.get(b)) {
        (Some(ra), Some(rb)) => by_area_descending(ra, rb),
        _ => Ordering::Equal,
    });
    indices
}

/// Indices of `requests` sorted by height, tallest first, wider rooms first
/// among equal heights (stable)
pub fn height_order(requests: &[RoomRequest]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..requests.len()).collect();
    indices.sort_by(|&a, &b| match (requests.get(a), requests.get(b)) {
        (Some(ra), Some(rb)) => rb
            .height
            .partial_cmp(&ra.height)
            .unwrap_or(Ordering::Equal)
            .then_with(|| rb.width.partial_cmp(&ra.width).unwrap_or(Ordering::Equal)),
        _ => Ordering::Equal,
    });
    indices
}
