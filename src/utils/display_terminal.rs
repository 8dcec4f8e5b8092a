//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 부팅 과정(설정 로드, 저장소 연결, 서비스 조립)을 박스 제목과
//! 단계 표시로 출력합니다. 로그 레벨과 무관하게 항상 표준 출력에 찍힙니다.

const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║               PHOTO SHARE BACKEND                ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(BOX_WIDTH);

    println!("╔{}╗", border);
    println!("║{:^width$}║", title, width = BOX_WIDTH);
    println!("╚{}╝", border);
}

/// 부팅 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Connecting storage backend
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 부팅 단계 완료와 준비된 컴포넌트 수를 표시합니다
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} ready)", step, description, count);
}

/// 단계 안의 개별 컴포넌트 상태
///
/// ```text
///    ├─ UserStore: MongoDB (users)
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 서비스 레지스트리 조립이 끝났을 때의 요약
///
/// # Arguments
///
/// * `backend` - 사용 중인 저장소 백엔드 이름
/// * `stores` - 준비된 저장소 수
/// * `services` - 준비된 서비스 수
pub fn print_final_summary(backend: &str, stores: usize, services: usize) {
    println!();
    print_boxed_title("🎉 SERVICE REGISTRY READY");
    println!("   🗄️  Storage: {}", backend);
    println!("   📦 Stores: {}", stores);
    println!("   🔧 Services: {}", services);
    println!();
}
