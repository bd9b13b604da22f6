//! 터미널 출력 포맷팅 유틸리티
//!
//! 서비스 레지스트리 초기화 과정을 시각적으로 표시합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║         🔄 INITIALIZING SERVICE REGISTRY         ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(50);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 처리된 항목 수와 함께 표시합니다
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 하위 작업 상태를 트리 형태로 표시합니다
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 레지스트리 초기화 요약을 출력합니다
pub fn print_final_summary(services: usize) {
    println!();
    print_boxed_title("🎉 SERVICE REGISTRY INITIALIZED");
    println!("   🔧 Services: {}", services);
    println!();
}
