use super::*;

#[test]
fn unresolved_session_always_loads() {
    for status in [SessionStatus::Unknown, SessionStatus::Verifying] {
        for kind in [RouteKind::Public, RouteKind::Protected, RouteKind::AuthOnly] {
            assert_eq!(route_decision(status, kind), RouteDecision::Loading);
        }
    }
}

#[test]
fn protected_route_redirects_signed_out_visitors_to_login() {
    assert_eq!(
        route_decision(SessionStatus::Unauthenticated, RouteKind::Protected),
        RouteDecision::RedirectLogin
    );
}

#[test]
fn protected_route_renders_for_authenticated_session() {
    assert_eq!(
        route_decision(SessionStatus::Authenticated, RouteKind::Protected),
        RouteDecision::Render
    );
}

#[test]
fn auth_only_route_redirects_authenticated_session_home() {
    assert_eq!(
        route_decision(SessionStatus::Authenticated, RouteKind::AuthOnly),
        RouteDecision::RedirectHome
    );
}

#[test]
fn auth_only_route_renders_for_signed_out_visitors() {
    assert_eq!(
        route_decision(SessionStatus::Unauthenticated, RouteKind::AuthOnly),
        RouteDecision::Render
    );
}

#[test]
fn public_route_renders_either_way() {
    assert_eq!(
        route_decision(SessionStatus::Unauthenticated, RouteKind::Public),
        RouteDecision::Render
    );
    assert_eq!(
        route_decision(SessionStatus::Authenticated, RouteKind::Public),
        RouteDecision::Render
    );
}
