//! Global CSS styles for FieldLab.
//!
//! Black stages, white type, one green accent. Motion lives in keyframes
//! here; components only toggle classes and set computed inline values.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* LEAF (accent) */
  --leaf: #60ad5e;
  --leaf-rgb: 96, 173, 94;
  --field: #2e7d32;
  --field-dark: #1b5e20;

  /* NIGHT (backgrounds) */
  --night: #000000;
  --night-raised: #0b0b0b;
  --night-border: rgba(255, 255, 255, 0.12);

  /* INK (text) */
  --ink: #ffffff;
  --ink-soft: rgba(255, 255, 255, 0.85);
  --ink-muted: rgba(255, 255, 255, 0.7);
  --ink-faint: rgba(255, 255, 255, 0.5);

  /* Typography */
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  /* Layout */
  --container: 1200px;
  --navbar-height: 72px;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --ease-rise: cubic-bezier(0.2, 0.8, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: auto;
  -webkit-font-smoothing: antialiased;
}

body {
  background: var(--night);
  color: var(--ink);
  font-family: var(--font-sans);
  line-height: 1.6;
  overflow-x: hidden;
}

img {
  display: block;
  max-width: 100%;
}

a {
  color: inherit;
  text-decoration: none;
}

button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

:focus-visible {
  outline: 2px solid var(--leaf);
  outline-offset: 3px;
}

.container {
  position: relative;
  z-index: 1;
  width: 100%;
  max-width: var(--container);
  margin: 0 auto;
  padding: 0 24px;
}

/* === Keyframes === */
@keyframes pan {
  from { background-position: 0 0; }
  to { background-position: 0 240px; }
}

@keyframes revealText {
  from { opacity: 0; transform: translateY(18px); filter: blur(6px); }
  to { opacity: 1; transform: translateY(0); filter: blur(0); }
}

@keyframes revealY {
  from { opacity: 0; transform: translateY(24px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes revealYDim {
  from { opacity: 0; transform: translateY(24px); }
  to { opacity: 0.7; transform: translateY(0); }
}

@keyframes fadeUp {
  from { opacity: 0; transform: translateY(16px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes fadeIn {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes glowPulse {
  0%, 100% { box-shadow: 0 0 0 4px rgba(var(--leaf-rgb), 0.1), 0 0 12px var(--glow-soft); }
  50% { box-shadow: 0 0 0 6px rgba(var(--leaf-rgb), 0.16), 0 0 22px var(--glow-strong); }
}

@keyframes bounceY {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(6px); }
}

@keyframes dash {
  to { stroke-dashoffset: -40; }
}

@keyframes pulse {
  0%, 100% { opacity: 0.35; transform: scale(1); }
  50% { opacity: 0.8; transform: scale(1.15); }
}

/* === Navbar === */
.navbar-shell {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  pointer-events: none;
}

.navbar {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: var(--navbar-height);
  padding: 0 24px;
  background: linear-gradient(to bottom, rgba(0, 0, 0, 0.7), rgba(0, 0, 0, 0));
  transition: transform var(--transition-normal);
  pointer-events: auto;
}

.navbar.hidden {
  transform: translateY(-100%);
}

.navbar-brand {
  display: flex;
  align-items: center;
  gap: 12px;
}

.navbar-logo {
  width: 36px;
  height: 36px;
}

.navbar-wordmark {
  font-weight: 600;
  letter-spacing: 0.12em;
  white-space: nowrap;
}

.navbar-links {
  display: none;
  gap: 28px;
}

.navbar-link {
  color: var(--ink-soft);
  font-size: 0.95rem;
  transition: color var(--transition-fast);
}

.navbar-link:hover {
  color: var(--leaf);
}

@media (min-width: 900px) {
  .navbar-links { display: flex; }
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  text-align: center;
  background:
    linear-gradient(rgba(0, 0, 0, 0.45), rgba(0, 0, 0, 0.75)),
    url('/assets/hero.webp') center / cover no-repeat;
}

.hero-content {
  max-width: 880px;
  padding: 0 24px;
}

.hero-title {
  font-size: clamp(2.4rem, 6vw, 4.5rem);
  font-weight: 700;
  line-height: 1.1;
}

.hero-tagline {
  margin-top: 20px;
  font-size: clamp(1rem, 2vw, 1.35rem);
  color: var(--ink-soft);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 16px;
  margin-top: 36px;
}

.reveal-text {
  animation: revealText 1.2s var(--ease-rise) both;
}

.reveal-text.slow {
  animation-duration: 1.6s;
  animation-delay: 0.3s;
}

.reveal-text.slowest {
  animation-duration: 2s;
  animation-delay: 0.8s;
}

.cue-dock {
  position: absolute;
  left: 50%;
  bottom: 32px;
  transform: translateX(-50%);
  z-index: 2;
}

/* === Buttons === */
.btn-contained,
.btn-outline,
.btn-glow {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 8px;
  padding: 12px 28px;
  border-radius: 999px;
  font-weight: 600;
  transition: background var(--transition-fast), box-shadow var(--transition-fast), border-color var(--transition-fast);
}

.btn-contained {
  background: var(--field);
  color: var(--ink);
}

.btn-contained:hover {
  background: var(--field-dark);
}

.btn-outline {
  border: 1px solid rgba(255, 255, 255, 0.8);
  color: var(--ink);
}

.btn-outline:hover {
  border-color: var(--leaf);
  color: var(--leaf);
}

.btn-glow {
  background: linear-gradient(135deg, var(--leaf), var(--field));
  color: var(--ink);
  box-shadow: 0 0 0 rgba(var(--leaf-rgb), 0);
}

.btn-glow:hover,
.btn-glow:focus-visible {
  box-shadow: 0 0 18px rgba(var(--leaf-rgb), 0.55);
}

.btn-cue {
  display: inline-flex;
  flex-direction: column;
  align-items: center;
  gap: 4px;
  color: var(--ink-muted);
  font-size: 0.85rem;
  letter-spacing: 0.08em;
  text-transform: uppercase;
}

.btn-cue:hover {
  color: var(--ink);
}

.cue-arrow {
  font-size: 1.6rem;
  line-height: 1;
}

.btn-cue.animated .cue-arrow {
  animation: bounceY 1.6s ease-in-out infinite;
}

.btn-tiny {
  padding: 6px 12px;
  border: 1px solid var(--night-border);
  border-radius: 6px;
  font-size: 0.85rem;
  color: var(--ink-soft);
}

.btn-tiny:hover {
  border-color: var(--leaf);
  color: var(--ink);
}

/* === Stages === */
.stage {
  position: relative;
  overflow: hidden;
  background: var(--night);
}

.stage.padded {
  padding: 120px 0;
}

.stage-content {
  position: relative;
  z-index: 1;
  max-width: 920px;
  margin: 0 auto;
  padding: 0 24px;
  text-align: center;
}

.dot-grid {
  position: absolute;
  inset: 0;
  z-index: 0;
  pointer-events: none;
  background-image: radial-gradient(rgba(255, 255, 255, 0.9) 1px, transparent 1px);
  background-size: 24px 24px;
}

.overline {
  display: inline-block;
  font-size: 0.8rem;
  font-weight: 600;
  letter-spacing: 0.18em;
  text-transform: uppercase;
  color: var(--ink-muted);
}

.overline.dim {
  opacity: 0.7;
}

/* === Intro (chips) === */
.stage.intro {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 120px 0;
}

.intro-copy {
  margin-top: 24px;
  font-size: clamp(1.2rem, 2.6vw, 1.9rem);
  line-height: 1.7;
}

.intro-copy.pending {
  opacity: 0;
  transform: translateY(16px);
}

.intro-copy.fade-up {
  animation: fadeUp 0.9s var(--ease-rise) both;
}

.soft {
  color: var(--ink-muted);
}

.stage.intro .cue-dock {
  position: static;
  transform: none;
  margin-top: 48px;
}

.chip-glow {
  display: inline-block;
  padding: 0 10px;
  border: 1px solid rgba(255, 255, 255, 0.25);
  border-radius: 999px;
  transition: border-color 400ms ease, box-shadow 400ms ease, color 400ms ease;
}

.chip-glow.pulsing {
  animation: glowPulse 1.2s ease-in-out infinite;
}

.em-dotted {
  font-style: normal;
  border-bottom: 1px dotted rgba(255, 255, 255, 0.6);
}

/* === Pinned scenes === */
.pinned-track {
  position: relative;
  height: 300vh;
  background: var(--night);
}

.pinned-stage {
  position: sticky;
  top: 0;
  height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
}

.sweep-grid {
  position: absolute;
  inset: 0;
  background-image: radial-gradient(rgba(255, 255, 255, 0.8) 1px, transparent 1px);
  background-size: 28px 28px;
}

.sweep {
  position: absolute;
  inset: 0;
  pointer-events: none;
  background: radial-gradient(ellipse 80% 30% at 50% var(--y, 50%), rgba(var(--leaf-rgb), 0.28), transparent 70%);
}

.sweep-sentence {
  margin-top: 18px;
  font-size: clamp(1.1rem, 2.4vw, 1.7rem);
  line-height: 1.6;
}

.sensor-scene {
  position: absolute;
  inset: 0;
}

.sensor-copy {
  margin-top: 20px;
  font-size: clamp(1.1rem, 2.4vw, 1.7rem);
  line-height: 1.7;
}

/* === Section headers === */
.section-header {
  max-width: 780px;
  margin-bottom: 48px;
}

.section-header.centered {
  margin-left: auto;
  margin-right: auto;
  text-align: center;
}

.section-title {
  margin-top: 10px;
  font-size: clamp(1.8rem, 4vw, 2.8rem);
  font-weight: 700;
  line-height: 1.2;
}

.section-blurb {
  margin-top: 16px;
  color: var(--ink-muted);
}

/* === Field trials === */
.stage.fields {
  padding: 120px 0;
}

.fields-column {
  display: flex;
  flex-direction: column;
  gap: 28px;
  max-width: 860px;
}

.step-card {
  padding: 32px;
  border: 1px solid var(--night-border);
  border-radius: 16px;
  background: rgba(255, 255, 255, 0.03);
  transition: border-color var(--transition-normal), box-shadow var(--transition-normal);
}

.step-card:hover,
.step-card:focus-within {
  border-color: rgba(var(--leaf-rgb), 0.6);
  box-shadow: 0 0 24px rgba(var(--leaf-rgb), 0.18);
}

.step-title {
  margin-top: 8px;
  font-size: 1.5rem;
}

.step-summary {
  margin-top: 12px;
  color: var(--ink-soft);
}

.step-bullets {
  margin: 16px 0 0 20px;
  color: var(--ink-muted);
}

.card-cta {
  margin-top: 24px;
}

.tag-chips {
  display: flex;
  flex-wrap: wrap;
  gap: 8px;
  margin-top: 16px;
}

.tag-chip {
  padding: 4px 12px;
  border: 1px solid rgba(255, 255, 255, 0.3);
  border-radius: 999px;
  font-size: 0.85rem;
  color: var(--ink-soft);
}

.tag-chip.small {
  padding: 2px 10px;
  font-size: 0.75rem;
}

/* === Technology orbit === */
.orbit {
  display: grid;
  grid-template-columns: 1fr;
  gap: 16px;
}

.orbit-center {
  display: flex;
  justify-content: center;
}

.orbit-image {
  width: min(320px, 80vw);
  aspect-ratio: 1;
  object-fit: cover;
  border-radius: 50%;
  border: 1px solid rgba(var(--leaf-rgb), 0.5);
}

.orbit-image.fade-in {
  animation: fadeIn 500ms ease both;
}

.orbit-card {
  position: relative;
  display: flex;
  flex-direction: column;
  gap: 6px;
  padding: 18px 20px;
  text-align: left;
  border: 1px solid var(--night-border);
  border-radius: 14px;
  background: rgba(0, 0, 0, 0.6);
  transition: border-color var(--transition-normal), box-shadow var(--transition-normal);
}

.orbit-card:hover,
.orbit-card:focus-visible,
.orbit-card.active {
  border-color: var(--leaf);
  box-shadow: 0 0 20px rgba(var(--leaf-rgb), 0.25);
}

.orbit-title {
  font-weight: 600;
}

.orbit-blurb {
  font-size: 0.9rem;
  color: var(--ink-muted);
}

.orbit-pulse {
  position: absolute;
  top: 14px;
  right: 14px;
  width: 8px;
  height: 8px;
  border-radius: 50%;
  background: var(--leaf);
  animation: pulse 2.4s ease-in-out infinite;
}

.orbit-pulse.still {
  animation: none;
}

@media (min-width: 600px) {
  .orbit {
    position: relative;
    display: block;
    height: 640px;
  }

  .orbit-center {
    position: absolute;
    inset: 0;
    align-items: center;
  }

  .orbit-card {
    position: absolute;
    top: 50%;
    left: 50%;
    width: 240px;
    transform: translate(-50%, -50%) var(--orbit);
  }
}

/* === Data path diagram === */
.diagram-frame {
  border: 1px solid var(--night-border);
  border-radius: 16px;
  padding: 16px;
  background: rgba(255, 255, 255, 0.02);
  aspect-ratio: 980 / 430;
}

.flow {
  stroke-dasharray: 8 12;
  animation: dash 2s linear infinite;
}

/* === Fit matrix === */
.matrix {
  display: none;
  overflow-x: auto;
  border: 1px solid var(--night-border);
  border-radius: 12px;
}

.matrix-row {
  display: grid;
}

.matrix-cell {
  padding: 14px 16px;
  border-bottom: 1px solid var(--night-border);
  text-align: center;
  color: var(--ink-muted);
  transition: background var(--transition-fast), color var(--transition-fast);
}

.matrix-cell.header {
  font-size: 0.8rem;
  font-weight: 600;
  letter-spacing: 0.08em;
  text-transform: uppercase;
  color: var(--ink);
}

.matrix-cell.sticky {
  position: sticky;
  left: 0;
  z-index: 1;
  text-align: left;
  background: var(--night);
}

.matrix-cell.on {
  color: var(--leaf);
}

.matrix-cell.highlight {
  background: rgba(var(--leaf-rgb), 0.12);
}

.matrix-blocks {
  display: flex;
  flex-direction: column;
  gap: 16px;
}

.matrix-block {
  padding: 18px;
  border: 1px solid var(--night-border);
  border-radius: 12px;
}

@media (min-width: 900px) {
  .matrix { display: block; }
  .matrix-blocks { display: none; }
}

/* === Footer CTA === */
.footer-cta {
  padding: 140px 0;
  text-align: center;
}

.footer-glow {
  position: absolute;
  left: 50%;
  top: 50%;
  width: 560px;
  height: 560px;
  transform: translate(-50%, -50%);
  border-radius: 50%;
  background: radial-gradient(circle, rgba(var(--leaf-rgb), 0.3), transparent 65%);
  animation: pulse 6s ease-in-out infinite;
}

.footer-content {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 20px;
}

.footer-title {
  font-size: clamp(1.8rem, 4vw, 2.8rem);
}

.footer-copy {
  max-width: 640px;
  color: var(--ink-muted);
}

/* === Field panel === */
.panel {
  padding: calc(var(--navbar-height) + 48px) 0 80px;
}

.panel-back {
  display: none;
  position: absolute;
  top: 24px;
  left: 24px;
  z-index: 2;
}

@media (min-width: 900px) {
  .panel-back { display: block; }
}

.panel-title {
  margin-top: 8px;
  font-size: clamp(2rem, 4.5vw, 3rem);
  line-height: 1.2;
}

.panel-intro {
  margin-top: 20px;
  max-width: 900px;
  color: var(--ink-soft);
  opacity: 0.92;
}

.panel-intro strong {
  color: var(--ink);
}

.panel-hero {
  width: 100%;
  margin-top: 32px;
  border-radius: 16px;
  object-fit: cover;
}

.stat-bar {
  display: grid;
  grid-template-columns: 1fr;
  margin-top: 40px;
  border: 1px solid var(--night-border);
  border-radius: 12px;
}

.stat-tile {
  display: flex;
  flex-direction: column;
  gap: 2px;
  padding: 18px 20px;
  border-bottom: 1px solid var(--night-border);
}

.stat-label {
  font-size: 0.75rem;
  letter-spacing: 0.14em;
  text-transform: uppercase;
  color: var(--ink-faint);
}

.stat-value {
  font-weight: 600;
}

@media (min-width: 600px) {
  .stat-bar { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 900px) {
  .stat-bar { grid-template-columns: repeat(4, 1fr); }
  .stat-tile { border-bottom: none; border-right: 1px solid var(--night-border); }
  .stat-tile:last-child { border-right: none; }
}

.panel-details {
  display: grid;
  grid-template-columns: 1fr;
  gap: 32px;
  margin-top: 32px;
  padding: 28px;
  border: 1px solid var(--night-border);
  border-radius: 12px;
}

@media (min-width: 900px) {
  .panel-details { grid-template-columns: 1fr 1fr; }
}

.definition-list {
  display: flex;
  flex-direction: column;
  gap: 18px;
}

.definition dt {
  font-weight: 600;
}

.definition dd {
  color: var(--ink-muted);
}

/* === Gallery === */
.gallery {
  padding: 80px 0 120px;
}

.masonry {
  columns: 1;
  column-gap: 16px;
  padding: 16px;
  border: 1px solid var(--night-border);
  border-radius: 16px;
}

@media (min-width: 600px) { .masonry { columns: 2; } }
@media (min-width: 900px) { .masonry { columns: 3; } }
@media (min-width: 1200px) { .masonry { columns: 4; } }

.tile {
  position: relative;
  display: block;
  width: 100%;
  margin-bottom: 16px;
  break-inside: avoid;
  overflow: hidden;
  border-radius: 10px;
}

.tile img {
  width: 100%;
  aspect-ratio: 16 / 10;
  object-fit: cover;
  transition: transform var(--transition-normal);
}

.tile:hover img {
  transform: scale(1.04);
}

.tile-caption {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  padding: 10px 12px;
  font-size: 0.85rem;
  text-align: left;
  background: linear-gradient(to top, rgba(0, 0, 0, 0.8), transparent);
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.tile:hover .tile-caption,
.tile:focus-visible .tile-caption {
  opacity: 1;
}

.lightbox-backdrop {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 24px;
  background: rgba(0, 0, 0, 0.9);
  animation: fadeIn 200ms ease both;
}

.lightbox {
  max-width: min(1100px, 100%);
}

.lightbox-media {
  position: relative;
}

.lightbox-media img {
  max-height: 78vh;
  margin: 0 auto;
  border-radius: 10px;
}

.lightbox-zone {
  display: none;
  position: absolute;
  top: 0;
  bottom: 0;
  width: 50%;
}

.lightbox-zone.prev { left: 0; cursor: w-resize; }
.lightbox-zone.next { right: 0; cursor: e-resize; }

@media (min-width: 600px) {
  .lightbox-zone { display: block; }
}

.lightbox-caption {
  margin-top: 12px;
  text-align: center;
  color: var(--ink-muted);
}

.lightbox-controls {
  display: flex;
  justify-content: center;
  gap: 8px;
  margin-top: 12px;
}

.mobile-back {
  position: sticky;
  bottom: 16px;
  z-index: 10;
  display: flex;
  justify-content: center;
  margin-top: 32px;
}

@media (min-width: 900px) {
  .mobile-back { display: none; }
}

/* === Not found === */
.not-found {
  min-height: 100vh;
  display: flex;
  align-items: center;
  text-align: center;
}

.not-found .btn-contained {
  margin-top: 32px;
}

/* === Reduced motion === */
@media (prefers-reduced-motion: reduce) {
  *, *::before, *::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
  }

  .pinned-track { height: auto; }
  .pinned-stage { position: relative; }
}

.still,
.still * {
  animation: none !important;
}
"#;
