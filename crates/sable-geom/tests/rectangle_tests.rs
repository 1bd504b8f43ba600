// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Integration tests for `Rectangle` queries and combinators.

use sable_geom::{GeomError, NativeRect, Point, Rectangle, Vector};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn default_rectangle_is_all_zero() {
    let rect = Rectangle::default();
    assert_eq!(rect, Rectangle::EMPTY);
    assert_eq!(
        [rect.left(), rect.right(), rect.top(), rect.bottom()],
        [0, 0, 0, 0]
    );
    assert!(rect.is_empty());
}

#[test]
fn derived_edges_follow_origin_and_extent() {
    let rect = Rectangle::new(1, 2, 3, 4);
    assert_eq!(rect.x(), 1);
    assert_eq!(rect.y(), 2);
    assert_eq!(rect.width(), 3);
    assert_eq!(rect.height(), 4);
    assert_eq!(rect.left(), 1);
    assert_eq!(rect.right(), 4);
    assert_eq!(rect.top(), 2);
    assert_eq!(rect.bottom(), 6);
    assert_eq!(rect.location(), Point::new(1, 2));
    assert_eq!(rect.area(), 12);
}

#[test]
fn center_truncates_half_extents() {
    assert_eq!(Rectangle::new(0, 0, 50, 20).center(), Point::new(25, 10));
    assert_eq!(Rectangle::default().center(), Point::new(0, 0));
    assert_eq!(Rectangle::new(0, 0, 5, 7).center(), Point::new(2, 3));
    // Truncation is toward zero, not floor.
    assert_eq!(Rectangle::new(10, 10, -5, -5).center(), Point::new(8, 8));
}

#[test]
fn is_empty_requires_every_field_zero() {
    assert!(!Rectangle::new(5, 5, 0, 0).is_empty());
    assert!(!Rectangle::new(0, 0, 0, 1).is_empty());
    assert_eq!(Rectangle::new(5, 5, 0, 0).area(), 0);
}

#[test]
fn negative_extents_propagate() {
    let rect = Rectangle::new(10, 10, -5, -5);
    assert_eq!(rect.right(), 5);
    assert_eq!(rect.bottom(), 5);
    assert_eq!(rect.area(), 25);
    // Left is greater than right, so nothing satisfies the inclusive test.
    assert!(!rect.contains_point(Point::new(10, 10)));
    assert!(!rect.contains_point(Point::new(7, 7)));
}

#[test]
fn edge_arithmetic_wraps_instead_of_panicking() {
    let rect = Rectangle::new(i32::MAX, i32::MAX, 1, 1);
    assert_eq!(rect.right(), i32::MIN);
    assert_eq!(rect.bottom(), i32::MIN);
    assert_eq!(Rectangle::new(0, 0, i32::MAX, 2).area(), -2);
}

#[test]
fn intersects_is_symmetric_and_inclusive() {
    let a = Rectangle::new(0, 0, 50, 50);
    let cases = [
        (Rectangle::new(25, 25, 50, 50), true),
        (Rectangle::new(50, 50, 50, 50), true),
        (Rectangle::new(50, 0, 50, 50), true),
        (Rectangle::new(51, 0, 50, 50), false),
        (Rectangle::new(0, 51, 50, 50), false),
        (Rectangle::new(51, 51, 50, 50), false),
    ];
    for (b, expected) in cases {
        assert_eq!(a.intersects(&b), expected, "{a} vs {b}");
        assert_eq!(b.intersects(&a), expected, "{b} vs {a}");
    }
}

#[test]
fn contains_rect_requires_full_coverage() {
    let rect = Rectangle::new(0, 0, 50, 50);
    assert!(!rect.contains_rect(&Rectangle::new(25, 25, 50, 50)));
    assert!(rect.contains_rect(&Rectangle::new(0, 0, 50, 50)));
    assert!(rect.contains_rect(&Rectangle::new(15, 15, 10, 10)));
    assert!(rect.contains_rect(&Rectangle::new(50, 50, 0, 0)));
}

#[test]
fn contains_point_is_boundary_inclusive() {
    let rect = Rectangle::new(0, 0, 50, 50);
    for (x, y) in [(0, 0), (0, 50), (50, 0), (50, 50)] {
        assert!(rect.contains_point(Point::new(x, y)), "({x},{y})");
    }
    for (x, y) in [(-1, 0), (0, -1), (-1, -1), (51, 0), (0, 51), (51, 51)] {
        assert!(!rect.contains_point(Point::new(x, y)), "({x},{y})");
    }
}

#[test]
fn contains_vector_is_boundary_inclusive() {
    let rect = Rectangle::new(0, 0, 50, 50);
    for (x, y) in [(0.0, 0.0), (0.0, 50.0), (50.0, 0.0), (50.0, 50.0), (25.5, 49.9)] {
        assert!(rect.contains_vector(Vector::new(x, y)), "({x},{y})");
    }
    for (x, y) in [(-1.0, 0.0), (0.0, -0.5), (50.01, 0.0), (0.0, 51.0), (51.0, 51.0)] {
        assert!(!rect.contains_vector(Vector::new(x, y)), "({x},{y})");
    }
}

#[test]
fn intersect_matches_reference_cases() {
    init_tracing();
    let a = Rectangle::new(0, 0, 50, 50);
    assert_eq!(a.intersect(&Rectangle::new(0, 0, 50, 50)), a);
    assert_eq!(
        a.intersect(&Rectangle::new(25, 25, 50, 50)),
        Rectangle::new(25, 25, 25, 25)
    );
    assert_eq!(
        a.intersect(&Rectangle::new(51, 51, 50, 50)),
        Rectangle::EMPTY
    );
}

#[test]
fn touching_intersection_is_positioned_and_not_empty() {
    let a = Rectangle::new(0, 0, 50, 50);
    let b = Rectangle::new(50, 50, 50, 50);
    let hit = a.intersect(&b);
    assert_eq!(hit, Rectangle::new(50, 50, 0, 0));
    assert_eq!(hit.area(), 0);
    assert!(!hit.is_empty());
    assert_ne!(hit, Rectangle::EMPTY);
}

#[test]
fn union_covers_both_inputs() {
    let a = Rectangle::new(0, 0, 10, 10);
    let b = Rectangle::new(20, -5, 5, 5);
    let u = a.union(&b);
    assert_eq!(u, Rectangle::new(0, -5, 25, 15));
    assert_eq!(u, b.union(&a));
    assert!(u.contains_rect(&a) && u.contains_rect(&b));
}

#[test]
fn intersection_depth_is_signed_per_axis() {
    init_tracing();
    let a = Rectangle::new(0, 0, 10, 10);
    // `a` left of and above `b`: pushes toward negative.
    assert_eq!(
        a.intersection_depth(&Rectangle::new(8, 6, 10, 10)),
        Vector::new(-2.0, -4.0)
    );
    // `a` right of and below `b`: pushes toward positive.
    assert_eq!(
        a.intersection_depth(&Rectangle::new(-7, -3, 10, 10)),
        Vector::new(3.0, 7.0)
    );
    // Concentric: zero distance counts as the non-positive branch.
    assert_eq!(a.intersection_depth(&a), Vector::new(-10.0, -10.0));
    // Odd extents use fractional half sizes.
    assert_eq!(
        Rectangle::new(0, 0, 3, 3).intersection_depth(&Rectangle::new(2, 0, 3, 3)),
        Vector::new(-1.0, -3.0)
    );
}

#[test]
fn intersection_depth_treats_touching_as_separated() {
    let a = Rectangle::new(0, 0, 50, 50);
    let b = Rectangle::new(50, 0, 50, 50);
    assert!(a.intersects(&b));
    assert_eq!(a.intersection_depth(&b), Vector::ZERO);
    assert_eq!(
        a.intersection_depth(&Rectangle::new(100, 100, 5, 5)),
        Vector::ZERO
    );
}

#[test]
fn moved_copies_leave_the_original_untouched() {
    let rect = Rectangle::new(1, 2, 3, 4);
    assert_eq!(rect.offset(10, -2), Rectangle::new(11, 0, 3, 4));
    assert_eq!(
        rect.with_location(Point::new(-5, 5)),
        Rectangle::new(-5, 5, 3, 4)
    );
    assert_eq!(rect, Rectangle::new(1, 2, 3, 4));
}

#[test]
fn native_record_keeps_field_order() {
    let rect = Rectangle::new(1, -2, 3, -4);
    let native = rect.to_native();
    assert_eq!(
        native,
        NativeRect {
            x: 1,
            y: -2,
            w: 3,
            h: -4
        }
    );
    assert_eq!(Rectangle::from(native), rect);
    assert_eq!(NativeRect::from(rect), native);
}

#[test]
fn display_and_parse_agree() {
    let rect = Rectangle::new(1, -2, 3, 4);
    let text = rect.to_string();
    assert_eq!(text, "{X:1 Y:-2, Width:3, Height:4}");
    assert_eq!(text.parse::<Rectangle>(), Ok(rect));
    assert_eq!(
        "  {X:0 Y:0, Width:0, Height:0}\n".parse::<Rectangle>(),
        Ok(Rectangle::EMPTY)
    );
}

#[test]
fn parse_rejects_malformed_literals() {
    let reason_of = |input: &str| match input.parse::<Rectangle>() {
        Err(GeomError::Parse { reason, .. }) => reason,
        other => panic!("expected parse error for {input:?}, got {other:?}"),
    };
    assert_eq!(reason_of("X:1 Y:2, Width:3, Height:4"), "expected braces");
    assert_eq!(reason_of("{X:1 Y:2, Width:3}"), "missing field");
    assert_eq!(
        reason_of("{Y:1 X:2, Width:3, Height:4}"),
        "unexpected field name"
    );
    assert_eq!(
        reason_of("{X:1 Y:2, Width:3, Height:four}"),
        "field is not an i32"
    );
    assert_eq!(
        reason_of("{X:1 Y:2, Width:3, Height:4, Depth:5}"),
        "trailing input"
    );
    assert_eq!(reason_of("{X 1 Y:2, Width:3, Height:4}"), "expected `name:value`");
}
